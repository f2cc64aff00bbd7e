// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error translation tests.

use shiftpay_domain::DomainError;
use shiftpay_persistence::PersistenceError;

use crate::{ApiError, AuthError, translate_domain_error, translate_persistence_error};

#[test]
fn test_not_found_translation() {
    assert_eq!(
        translate_persistence_error(PersistenceError::EmployeeNotFound(4)),
        ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: String::from("Employee 4 does not exist"),
        }
    );
}

#[test]
fn test_conflict_translation() {
    assert!(matches!(
        translate_persistence_error(PersistenceError::ShiftAlreadyOpen { employee_id: 1 }),
        ApiError::Conflict { .. }
    ));
    assert!(matches!(
        translate_persistence_error(PersistenceError::ShiftAlreadyClosed(1)),
        ApiError::Conflict { .. }
    ));
    assert!(matches!(
        translate_domain_error(DomainError::ShiftAlreadyClosed),
        ApiError::Conflict { .. }
    ));
}

#[test]
fn test_domain_violation_unwraps() {
    let err = translate_persistence_error(PersistenceError::DomainViolation(
        DomainError::InvalidHourlyRate(0.0),
    ));

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "hourly_rate"));
}

#[test]
fn test_storage_failures_are_internal() {
    assert!(matches!(
        translate_persistence_error(PersistenceError::DatabaseError(String::from("disk I/O"))),
        ApiError::Internal { .. }
    ));
}

#[test]
fn test_auth_error_conversion() {
    let err: ApiError = AuthError::AuthenticationFailed {
        reason: String::from("Invalid username or password"),
    }
    .into();

    assert_eq!(
        err.to_string(),
        "Authentication failed: Invalid username or password"
    );
}
