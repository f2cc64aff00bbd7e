// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session-based authentication.

use shiftpay_domain::Account;
use shiftpay_persistence::{Persistence, PersistenceError, SessionData, parse_timestamp};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// Login name of the account seeded at startup.
pub const ADMIN_USERNAME: &str = "admin";

/// The reason reported for every rejected login.
///
/// Unknown usernames and wrong passwords must be indistinguishable.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// The identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    /// The account's database identifier.
    pub account_id: i64,
    /// The account's login name.
    pub username: String,
}

impl From<Account> for AuthenticatedAccount {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id,
            username: account.username,
        }
    }
}

/// Authentication service for session-based authentication.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticationService {
    session_lifetime: Duration,
}

impl Default for AuthenticationService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SESSION_LIFETIME)
    }
}

impl AuthenticationService {
    /// Default session lifetime (12 hours).
    pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::hours(12);

    /// Creates a service that issues sessions valid for `session_lifetime`.
    #[must_use]
    pub const fn new(session_lifetime: Duration) -> Self {
        Self { session_lifetime }
    }

    #[must_use]
    pub const fn session_lifetime(&self) -> Duration {
        self.session_lifetime
    }

    /// Verifies credentials and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `username` - The login name (exact, case-sensitive)
    /// * `password` - The plaintext password
    /// * `now` - The current time, used to compute the expiry
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_account`, `expires_at`)
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` with the same reason for an unknown
    /// username and for a wrong password, or `Internal` if the store fails.
    pub fn login(
        &self,
        persistence: &mut Persistence,
        username: &str,
        password: &str,
        now: OffsetDateTime,
    ) -> Result<(String, AuthenticatedAccount, OffsetDateTime), AuthError> {
        let Some(account) = persistence
            .verify_credentials(username, password)
            .map_err(Self::map_persistence_error)?
        else {
            warn!("Rejected login attempt");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from(INVALID_CREDENTIALS),
            });
        };

        let session_token: String = Self::generate_session_token();
        let expires_at: OffsetDateTime = now + self.session_lifetime;

        persistence
            .create_session(&session_token, account.account_id, expires_at)
            .map_err(Self::map_persistence_error)?;

        info!(account_id = account.account_id, username = %account.username, "Logged in");

        Ok((session_token, AuthenticatedAccount::from(account), expires_at))
    }

    /// Validates a session token and returns the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if the token is unknown or expired, or
    /// `Internal` if the store fails.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
        now: OffsetDateTime,
    ) -> Result<AuthenticatedAccount, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime =
            parse_timestamp(&session.expires_at).map_err(Self::map_persistence_error)?;

        if now >= expires_at {
            debug!(session_id = session.session_id, "Session expired");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let account = persistence
            .get_account_by_id(session.account_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Account not found"),
            })?;

        Ok(AuthenticatedAccount {
            account_id: account.account_id,
            username: account.username,
        })
    }

    /// Logs out by deleting the session. Unknown tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        let removed: usize = persistence
            .delete_session(session_token)
            .map_err(Self::map_persistence_error)?;
        debug!(removed, "Session deleted");
        Ok(())
    }

    /// Generates an unguessable session token (256 random bits, hex encoded).
    fn generate_session_token() -> String {
        format!(
            "{:032x}{:032x}",
            rand::random::<u128>(),
            rand::random::<u128>()
        )
    }

    fn map_persistence_error(err: PersistenceError) -> AuthError {
        AuthError::Internal {
            message: err.to_string(),
        }
    }
}
