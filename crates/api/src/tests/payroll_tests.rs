// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Salary computation tests.

use shiftpay_domain::PayPeriod;
use shiftpay_persistence::Persistence;
use time::{Duration, OffsetDateTime};

use super::helpers::{at, create_test_employee, create_test_persistence};
use crate::{ApiError, SalaryQuery, compute_salary, end_shift, start_shift};

fn work(persistence: &mut Persistence, employee_id: i64, start: OffsetDateTime, end: OffsetDateTime) {
    let started = start_shift(persistence, employee_id, start).unwrap();
    end_shift(persistence, started.shift.shift_id, end).unwrap();
}

#[test]
fn test_lifetime_salary() {
    let mut persistence = create_test_persistence();
    let employee_id = create_test_employee(&mut persistence, "Bob", "20");
    work(&mut persistence, employee_id, at(10, 0), at(10, 30));
    work(&mut persistence, employee_id, at(14, 0), at(15, 0));

    let response = compute_salary(&mut persistence, employee_id, &PayPeriod::lifetime()).unwrap();

    assert!((response.summary.hours - 1.5).abs() < 1e-9);
    assert!((response.summary.pay - 30.0).abs() < 1e-9);
    assert_eq!(response.shifts.len(), 2);
    assert_eq!(response.employee.full_name(), "Bob");
}

#[test]
fn test_open_shift_does_not_count() {
    let mut persistence = create_test_persistence();
    let employee_id = create_test_employee(&mut persistence, "Bob", "20");
    start_shift(&mut persistence, employee_id, at(9, 0)).unwrap();

    let response = compute_salary(&mut persistence, employee_id, &PayPeriod::lifetime()).unwrap();

    assert!(response.summary.hours.abs() < f64::EPSILON);
    assert!(response.summary.pay.abs() < f64::EPSILON);
    assert!(response.shifts.is_empty());
}

#[test]
fn test_unknown_employee_salary() {
    let mut persistence = create_test_persistence();

    assert!(matches!(
        compute_salary(&mut persistence, 9, &PayPeriod::lifetime()),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_period_narrows_shifts() {
    let mut persistence = create_test_persistence();
    let employee_id = create_test_employee(&mut persistence, "Bob", "10");
    work(&mut persistence, employee_id, at(9, 0), at(11, 0));
    let next_week = at(9, 0) + Duration::days(7);
    work(
        &mut persistence,
        employee_id,
        next_week,
        next_week + Duration::hours(4),
    );

    let query = SalaryQuery {
        from: Some(String::from("2026-03-09")),
        to: Some(String::from("2026-03-15")),
    };
    let period = query.to_period().unwrap();
    let response = compute_salary(&mut persistence, employee_id, &period).unwrap();

    assert!((response.summary.hours - 4.0).abs() < 1e-9);
    assert!((response.summary.pay - 40.0).abs() < 1e-9);
    assert_eq!(response.shifts.len(), 1);
    assert_eq!(response.period, period);
}

#[test]
fn test_inverted_period_is_validation_error() {
    let query = SalaryQuery {
        from: Some(String::from("2026-03-15")),
        to: Some(String::from("2026-03-09")),
    };

    let err: ApiError = query.to_period().unwrap_err().into();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "period"));
}

#[test]
fn test_malformed_period_bound() {
    let query = SalaryQuery {
        from: Some(String::from("March 9th")),
        to: None,
    };

    let err: ApiError = query.to_period().unwrap_err().into();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "from"));
}

#[test]
fn test_blank_bounds_mean_lifetime() {
    let query = SalaryQuery {
        from: Some(String::new()),
        to: Some(String::from("  ")),
    };

    assert!(query.to_period().unwrap().is_lifetime());
    assert!(SalaryQuery::default().to_period().unwrap().is_lifetime());
}
