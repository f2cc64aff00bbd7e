// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Shiftpay.
//!
//! This crate stores accounts, sessions, employees, and shift records in
//! `SQLite` through Diesel. The schema is created by embedded migrations
//! when a `Persistence` handle is constructed.
//!
//! ## Transactions
//!
//! Every operation that inspects state before changing it (starting a shift,
//! ending a shift, deleting an employee, seeding an account) runs in one
//! `IMMEDIATE` transaction. "At most one open shift per employee" is also
//! enforced by a partial unique index, and shift records cascade with their
//! employee through a foreign key.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` hands out an isolated shared-cache
//! in-memory database per call, so tests never observe each other.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use shiftpay_domain::{Account, Employee, ShiftRecord};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod timestamps;

#[cfg(test)]
mod tests;

pub use data_models::{AccountData, SessionData};
pub use error::PersistenceError;
pub use timestamps::{format_timestamp, parse_timestamp};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Store handle for the application.
///
/// The handle owns a single connection and is passed explicitly to every
/// operation; there is no process-global database state.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_shiftpay_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Credential Store
    // ========================================================================

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the username already exists or the insert fails.
    pub fn create_account(&mut self, username: &str, password: &str) -> Result<i64, PersistenceError> {
        mutations::accounts::create_account(&mut self.conn, username, password)
    }

    /// Creates the account `username` with `password` unless it exists.
    ///
    /// # Returns
    ///
    /// `true` if the account was created by this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup or insert fails.
    pub fn ensure_account(&mut self, username: &str, password: &str) -> Result<bool, PersistenceError> {
        mutations::accounts::ensure_account(&mut self.conn, username, password)
    }

    /// Retrieves an account by username (exact, case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_account_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::get_account_by_username(&mut self.conn, username)
    }

    /// Retrieves an account by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_account_by_id(
        &mut self,
        account_id: i64,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::get_account_by_id(&mut self.conn, account_id)
    }

    /// Counts all accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_accounts(&mut self) -> Result<i64, PersistenceError> {
        queries::accounts::count_accounts(&mut self.conn)
    }

    /// Verifies credentials.
    ///
    /// Unknown usernames, wrong passwords, and stored hashes that cannot be
    /// verified all yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the database query fails.
    pub fn verify_credentials(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, PersistenceError> {
        let account = self.get_account_by_username(username)?;
        let password_hash: Option<&str> = account.as_ref().map(|a| a.password_hash.as_str());

        match queries::accounts::verify_or_dummy(password, password_hash) {
            Ok(true) => Ok(account.map(|account| Account {
                account_id: account.account_id,
                username: account.username,
            })),
            Ok(false) => Ok(None),
            Err(e) => {
                tracing::warn!(
                    username,
                    error = %e,
                    "Stored password hash could not be verified"
                );
                Ok(None)
            }
        }
    }

    // ========================================================================
    // Session Management
    // ========================================================================

    /// Creates a new session for an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        account_id: i64,
        expires_at: OffsetDateTime,
    ) -> Result<i64, PersistenceError> {
        let expires_at: String = format_timestamp(expires_at)?;
        mutations::sessions::create_session(&mut self.conn, session_token, account_id, &expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::sessions::get_session_by_token(&mut self.conn, session_token)
    }

    /// Deletes a session by token. Deleting an unknown token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<usize, PersistenceError> {
        mutations::sessions::delete_session(&mut self.conn, session_token)
    }

    /// Deletes all sessions that expired before `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_expired_sessions(&mut self, now: OffsetDateTime) -> Result<usize, PersistenceError> {
        let now: String = format_timestamp(now)?;
        mutations::sessions::delete_expired_sessions(&mut self.conn, &now)
    }

    /// Stores a one-shot status message for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the update fails.
    pub fn set_flash_message(
        &mut self,
        session_token: &str,
        message: &str,
    ) -> Result<(), PersistenceError> {
        mutations::sessions::set_flash_message(&mut self.conn, session_token, message)
    }

    /// Returns and clears a session's pending status message.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the update fails.
    pub fn take_flash_message(
        &mut self,
        session_token: &str,
    ) -> Result<Option<String>, PersistenceError> {
        mutations::sessions::take_flash_message(&mut self.conn, session_token)
    }

    // ========================================================================
    // Employee Registry
    // ========================================================================

    /// Lists all employees in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_employees(&mut self) -> Result<Vec<Employee>, PersistenceError> {
        queries::employees::list_employees(&mut self.conn)
    }

    /// Retrieves an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_employee(&mut self, employee_id: i64) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::get_employee(&mut self.conn, employee_id)
    }

    /// Inserts a new employee and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_employee(&mut self, employee: &Employee) -> Result<Employee, PersistenceError> {
        mutations::employees::insert_employee(&mut self.conn, employee)
    }

    /// Deletes an employee and all of its shift records atomically.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no such employee exists, or an error if
    /// the delete fails.
    pub fn delete_employee(&mut self, employee_id: i64) -> Result<Employee, PersistenceError> {
        mutations::employees::delete_employee(&mut self.conn, employee_id)
    }

    // ========================================================================
    // Shift Ledger
    // ========================================================================

    /// Retrieves a shift record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_shift(&mut self, shift_id: i64) -> Result<Option<ShiftRecord>, PersistenceError> {
        queries::shifts::get_shift(&mut self.conn, shift_id)
    }

    /// Retrieves the employee's open shift, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_open_shift(
        &mut self,
        employee_id: i64,
    ) -> Result<Option<ShiftRecord>, PersistenceError> {
        queries::shifts::get_open_shift(&mut self.conn, employee_id)
    }

    /// Lists every open shift.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_open_shifts(&mut self) -> Result<Vec<ShiftRecord>, PersistenceError> {
        queries::shifts::list_open_shifts(&mut self.conn)
    }

    /// Lists an employee's closed shifts in chronological order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_closed_shifts(
        &mut self,
        employee_id: i64,
    ) -> Result<Vec<ShiftRecord>, PersistenceError> {
        queries::shifts::list_closed_shifts(&mut self.conn, employee_id)
    }

    /// Counts the shift records referencing an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_shifts_for_employee(&mut self, employee_id: i64) -> Result<i64, PersistenceError> {
        queries::shifts::count_shifts_for_employee(&mut self.conn, employee_id)
    }

    /// Opens a shift for an employee at `now`.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound`, `ShiftAlreadyOpen`, or a database error.
    pub fn start_shift(
        &mut self,
        employee_id: i64,
        now: OffsetDateTime,
    ) -> Result<ShiftRecord, PersistenceError> {
        mutations::shifts::start_shift(&mut self.conn, employee_id, now)
    }

    /// Closes a shift at `now`.
    ///
    /// # Errors
    ///
    /// Returns `ShiftNotFound`, `ShiftAlreadyClosed`, a `DomainViolation` when
    /// `now` precedes the start, or a database error.
    pub fn end_shift(
        &mut self,
        shift_id: i64,
        now: OffsetDateTime,
    ) -> Result<ShiftRecord, PersistenceError> {
        mutations::shifts::end_shift(&mut self.conn, shift_id, now)
    }
}
