// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shiftpay_domain::DomainError;
use shiftpay_persistence::PersistenceError;

use crate::request_response::PeriodParseError;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Credentials or session were rejected.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The credential or session store could not be reached.
    Internal {
        /// A description of the failure.
        message: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Internal { message } => write!(f, "Authentication error: {message}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation conflicts with the current state.
    Conflict {
        /// The rule that would be broken.
        rule: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { rule, message } => write!(f, "Conflict ({rule}): {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Internal { message } => Self::Internal { message },
        }
    }
}

impl From<PeriodParseError> for ApiError {
    fn from(err: PeriodParseError) -> Self {
        match err {
            PeriodParseError::Inverted(domain_err) => translate_domain_error(domain_err),
            PeriodParseError::InvalidDate { field, .. } => Self::InvalidInput {
                field: field.to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidFullName(message) => ApiError::InvalidInput {
            field: String::from("full_name"),
            message,
        },
        DomainError::InvalidHourlyRate(_) => ApiError::InvalidInput {
            field: String::from("hourly_rate"),
            message: err.to_string(),
        },
        DomainError::ShiftEndsBeforeStart { .. } => ApiError::InvalidInput {
            field: String::from("end_time"),
            message: err.to_string(),
        },
        DomainError::ShiftAlreadyClosed => ApiError::Conflict {
            rule: String::from("shift_closed_once"),
            message: String::from("Shift already ended"),
        },
        DomainError::InvalidPeriod { .. } => ApiError::InvalidInput {
            field: String::from("period"),
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Lookup and state failures become `ResourceNotFound` or `Conflict`; storage
/// failures become `Internal`.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::EmployeeNotFound(employee_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {employee_id} does not exist"),
        },
        PersistenceError::ShiftNotFound(shift_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift"),
            message: format!("Shift {shift_id} does not exist"),
        },
        PersistenceError::SessionNotFound => ApiError::ResourceNotFound {
            resource_type: String::from("Session"),
            message: String::from("Session does not exist"),
        },
        PersistenceError::ShiftAlreadyOpen { .. } => ApiError::Conflict {
            rule: String::from("one_open_shift"),
            message: String::from("Shift already started"),
        },
        PersistenceError::ShiftAlreadyClosed(_) => ApiError::Conflict {
            rule: String::from("shift_closed_once"),
            message: String::from("Shift already ended"),
        },
        PersistenceError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        _ => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
