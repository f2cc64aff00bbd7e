// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account queries.

use std::sync::LazyLock;

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::AccountData;
use crate::diesel_schema::accounts;
use crate::error::PersistenceError;

/// Verified in place of a missing account's hash. Unknown usernames and wrong
/// passwords both pay for one full bcrypt verification.
static DUMMY_PASSWORD_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| bcrypt::hash("shiftpay-no-such-account", bcrypt::DEFAULT_COST).ok());

/// Diesel Queryable struct for account rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = accounts)]
struct AccountRow {
    account_id: i64,
    username: String,
    password_hash: String,
    created_at: String,
}

impl From<AccountRow> for AccountData {
    fn from(row: AccountRow) -> Self {
        Self {
            account_id: row.account_id,
            username: row.username,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

/// Retrieves an account by username.
///
/// The lookup is an exact, case-sensitive match.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_account_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!("Looking up account by username");

    let row: Option<AccountRow> = accounts::table
        .filter(accounts::username.eq(username))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AccountData::from))
}

/// Retrieves an account by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_account_by_id(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!("Looking up account by ID: {}", account_id);

    let row: Option<AccountRow> = accounts::table
        .filter(accounts::account_id.eq(account_id))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AccountData::from))
}

/// Counts all accounts.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_accounts(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(accounts::table.count().get_result(conn)?)
}

/// Verifies a password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the stored hash cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}

/// Returns the hash verified in place of a missing account's hash.
#[must_use]
pub fn dummy_password_hash() -> Option<&'static str> {
    DUMMY_PASSWORD_HASH.as_deref()
}

/// Verifies a password against an account's hash, or against the dummy hash
/// when there is no account.
///
/// A missing account always yields `Ok(false)`.
///
/// # Errors
///
/// Returns an error if the account's stored hash cannot be parsed.
pub fn verify_or_dummy(
    password: &str,
    password_hash: Option<&str>,
) -> Result<bool, PersistenceError> {
    match password_hash {
        Some(password_hash) => verify_password(password, password_hash),
        None => {
            if let Some(dummy) = dummy_password_hash() {
                let _ = bcrypt::verify(password, dummy);
            }
            Ok(false)
        }
    }
}
