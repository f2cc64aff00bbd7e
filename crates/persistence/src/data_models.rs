// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Stored account row, including the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub account_id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}

/// Stored session row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub account_id: i64,
    pub created_at: String,
    /// RFC 3339 timestamp in UTC.
    pub expires_at: String,
    /// One-shot status message shown on the next rendered page.
    pub flash_message: Option<String>,
}
