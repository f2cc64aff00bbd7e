// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session cookie handling and the authentication extractor.
//!
//! Pages that require a signed-in account take a `SessionAccount`
//! argument. Requests without a valid session cookie are redirected to the
//! login page before the handler runs.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use shiftpay_api::{AuthError, AuthenticatedAccount, AuthenticationService};
use time::{Duration, OffsetDateTime};
use tracing::{debug, error};

use crate::AppState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "shiftpay_session";

/// Builds the `Set-Cookie` value that stores a session token.
pub fn session_cookie(token: &str, lifetime: Duration) -> String {
    format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        lifetime.whole_seconds()
    )
}

/// Builds the `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Finds the session token among the request's cookies.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Extractor for the signed-in account.
///
/// Carries the validated account and the session token, which handlers need
/// for logout and status messages.
pub struct SessionAccount {
    pub account: AuthenticatedAccount,
    pub token: String,
}

impl FromRequestParts<AppState> for SessionAccount {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: String = session_token(&parts.headers).ok_or_else(|| {
            debug!(path = %parts.uri.path(), "No session cookie");
            SessionError::MissingSession
        })?;

        let mut persistence = state.persistence.lock().await;
        let account: AuthenticatedAccount = AuthenticationService::validate_session(
            &mut persistence,
            &token,
            OffsetDateTime::now_utc(),
        )
        .map_err(|e| match e {
            AuthError::AuthenticationFailed { reason } => {
                debug!(%reason, "Session rejected");
                SessionError::InvalidSession
            }
            AuthError::Internal { message } => {
                error!(%message, "Session validation failed");
                SessionError::InvalidSession
            }
        })?;

        Ok(Self { account, token })
    }
}

/// Session extraction errors.
///
/// Both variants send the browser to the login page; an invalid cookie is
/// also cleared.
#[derive(Debug)]
pub enum SessionError {
    /// No session cookie was sent.
    MissingSession,
    /// The session cookie names an unknown or expired session.
    InvalidSession,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingSession => Redirect::to("/login").into_response(),
            Self::InvalidSession => (
                [(header::SET_COOKIE, clear_session_cookie())],
                Redirect::to("/login"),
            )
                .into_response(),
        }
    }
}
