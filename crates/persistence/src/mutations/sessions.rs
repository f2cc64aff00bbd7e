// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::sessions;
use crate::error::PersistenceError;
use crate::queries::sessions::get_session_by_token;

/// Creates a new session for an account.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The unique session token
/// * `account_id` - The account ID
/// * `expires_at` - The expiration timestamp (stored RFC 3339 format)
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    account_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!(
        "Creating session for account ID: {} with expiration: {}",
        account_id, expires_at
    );

    conn.immediate_transaction(|conn| {
        diesel::insert_into(sessions::table)
            .values((
                sessions::session_token.eq(session_token),
                sessions::account_id.eq(account_id),
                sessions::expires_at.eq(expires_at),
            ))
            .execute(conn)?;

        get_last_insert_rowid(conn)
    })
}

/// Deletes a session by token.
///
/// # Returns
///
/// The number of sessions removed (zero or one).
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<usize, PersistenceError> {
    debug!("Deleting session by token");

    Ok(diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?)
}

/// Deletes all sessions that expired before `now`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `now` - The current time in stored RFC 3339 format
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_expired_sessions(
    conn: &mut SqliteConnection,
    now: &str,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::delete(sessions::table)
        .filter(sessions::expires_at.lt(now))
        .execute(conn)?;

    info!("Deleted {} expired sessions", rows_affected);
    Ok(rows_affected)
}

/// Stores a status message to show on the session's next page.
///
/// Replaces any message that has not been shown yet.
///
/// # Errors
///
/// Returns `SessionNotFound` if the token is unknown, or an error if the
/// update fails.
pub fn set_flash_message(
    conn: &mut SqliteConnection,
    session_token: &str,
    message: &str,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .set(sessions::flash_message.eq(message))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::SessionNotFound);
    }
    Ok(())
}

/// Returns and clears the session's pending status message.
///
/// # Errors
///
/// Returns `SessionNotFound` if the token is unknown, or an error if the
/// read or update fails.
pub fn take_flash_message(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<Option<String>, PersistenceError> {
    conn.immediate_transaction(|conn| {
        let session = get_session_by_token(conn, session_token)?
            .ok_or(PersistenceError::SessionNotFound)?;

        if session.flash_message.is_some() {
            diesel::update(sessions::table)
                .filter(sessions::session_id.eq(session.session_id))
                .set(sessions::flash_message.eq(None::<String>))
                .execute(conn)?;
        }

        Ok(session.flash_message)
    })
}
