// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::accounts;
use crate::error::PersistenceError;
use crate::queries::accounts::get_account_by_username;

/// Hashes a plain-text password using bcrypt.
fn hash_password(password: &str) -> Result<String, PersistenceError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))
}

/// Creates a new account.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The login name (stored exactly as given)
/// * `password` - The plain-text password (will be hashed)
///
/// # Errors
///
/// Returns an error if the password cannot be hashed or the username
/// already exists.
pub fn create_account(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
) -> Result<i64, PersistenceError> {
    let password_hash: String = hash_password(password)?;

    conn.immediate_transaction(|conn| {
        diesel::insert_into(accounts::table)
            .values((
                accounts::username.eq(username),
                accounts::password_hash.eq(&password_hash),
            ))
            .execute(conn)?;

        let account_id: i64 = get_last_insert_rowid(conn)?;
        info!(account_id, username, "Account created");
        Ok(account_id)
    })
}

/// Creates the account `username` unless it already exists.
///
/// # Returns
///
/// `true` if the account was created, `false` if it already existed.
///
/// # Errors
///
/// Returns an error if the lookup or insert fails.
pub fn ensure_account(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
) -> Result<bool, PersistenceError> {
    if get_account_by_username(conn, username)?.is_some() {
        return Ok(false);
    }

    let password_hash: String = hash_password(password)?;

    conn.immediate_transaction(|conn| {
        // Re-check under the write lock
        if get_account_by_username(conn, username)?.is_some() {
            return Ok(false);
        }

        diesel::insert_into(accounts::table)
            .values((
                accounts::username.eq(username),
                accounts::password_hash.eq(&password_hash),
            ))
            .execute(conn)?;

        info!(username, "Seeded account");
        Ok(true)
    })
}
