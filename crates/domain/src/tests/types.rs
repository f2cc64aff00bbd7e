// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Duration;
use time::macros::{date, datetime};

use super::{at, closed_shift, open_shift};
use crate::{DomainError, Employee, PayPeriod};

#[test]
fn test_employee_new_trims_name() {
    let employee: Employee = Employee::new("  Alice Smith ", 15.0);
    assert_eq!(employee.full_name(), "Alice Smith");
    assert_eq!(employee.employee_id(), None);
}

#[test]
fn test_open_shift_has_no_duration() {
    let shift = open_shift(1, at(9, 0));
    assert!(shift.is_open());
    assert_eq!(shift.duration(), None);
}

#[test]
fn test_closed_shift_duration() {
    let shift = closed_shift(1, at(9, 0), at(10, 30));
    assert!(!shift.is_open());
    assert_eq!(shift.duration(), Some(Duration::minutes(90)));
}

#[test]
fn test_validate_close_rejects_closed_shift() {
    let shift = closed_shift(1, at(9, 0), at(10, 0));
    assert_eq!(
        shift.validate_close(at(11, 0)),
        Err(DomainError::ShiftAlreadyClosed)
    );
}

#[test]
fn test_validate_close_rejects_end_before_start() {
    let shift = open_shift(1, at(9, 0));
    assert!(matches!(
        shift.validate_close(at(8, 59)),
        Err(DomainError::ShiftEndsBeforeStart { .. })
    ));
}

#[test]
fn test_validate_close_accepts_zero_length_shift() {
    let shift = open_shift(1, at(9, 0));
    assert!(shift.validate_close(at(9, 0)).is_ok());
}

#[test]
fn test_pay_period_rejects_inverted_bounds() {
    let result = PayPeriod::new(Some(date!(2026 - 03 - 10)), Some(date!(2026 - 03 - 01)));
    assert!(matches!(result, Err(DomainError::InvalidPeriod { .. })));
}

#[test]
fn test_pay_period_bounds_are_inclusive() {
    let period: PayPeriod =
        PayPeriod::new(Some(date!(2026 - 03 - 01)), Some(date!(2026 - 03 - 02))).unwrap();

    assert!(period.contains(datetime!(2026-03-01 00:00 UTC)));
    assert!(period.contains(datetime!(2026-03-02 23:59 UTC)));
    assert!(!period.contains(datetime!(2026-02-28 23:59 UTC)));
    assert!(!period.contains(datetime!(2026-03-03 00:00 UTC)));
}

#[test]
fn test_lifetime_period_contains_everything() {
    let period: PayPeriod = PayPeriod::lifetime();
    assert!(period.is_lifetime());
    assert!(period.contains(datetime!(1970-01-01 00:00 UTC)));
    assert!(period.contains(datetime!(2100-12-31 23:59 UTC)));
}
