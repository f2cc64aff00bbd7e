// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee registry tests.

use super::helpers::{at, create_add_request, create_test_employee, create_test_persistence};
use crate::{
    AddEmployeeRequest, ApiError, add_employee, delete_employee, end_shift, get_employee,
    list_employees, list_employees_with_status, start_shift,
};

#[test]
fn test_add_employee_appears_in_list() {
    let mut persistence = create_test_persistence();

    let response = add_employee(&mut persistence, &create_add_request("Bob", "10")).unwrap();

    assert_eq!(response.message, "Employee added");
    let employees = list_employees(&mut persistence).unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0], response.employee);
    assert_eq!(employees[0].full_name(), "Bob");
}

#[test]
fn test_add_employee_trims_name() {
    let mut persistence = create_test_persistence();

    let response = add_employee(&mut persistence, &create_add_request("  Ann Lee ", "15.5")).unwrap();

    assert_eq!(response.employee.full_name(), "Ann Lee");
    assert!((response.employee.hourly_rate() - 15.5).abs() < f64::EPSILON);
}

#[test]
fn test_add_employee_empty_name_rejected() {
    let mut persistence = create_test_persistence();

    let result = add_employee(&mut persistence, &create_add_request("", "10"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "full_name"
    ));
    assert!(list_employees(&mut persistence).unwrap().is_empty());
}

#[test]
fn test_add_employee_whitespace_name_rejected() {
    let mut persistence = create_test_persistence();

    assert!(matches!(
        add_employee(&mut persistence, &create_add_request("   ", "10")),
        Err(ApiError::InvalidInput { .. })
    ));
}

#[test]
fn test_add_employee_negative_rate_rejected() {
    let mut persistence = create_test_persistence();

    let result = add_employee(&mut persistence, &create_add_request("Bob", "-5"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "hourly_rate"
    ));
}

#[test]
fn test_add_employee_garbage_rate_is_validation_error() {
    let mut persistence = create_test_persistence();

    for raw in ["abc", "", "0", "NaN", "inf"] {
        let result = add_employee(&mut persistence, &create_add_request("Bob", raw));
        assert!(
            matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "hourly_rate"),
            "rate {raw:?} should be rejected"
        );
    }

    let missing = AddEmployeeRequest {
        full_name: String::from("Bob"),
        hourly_rate: None,
    };
    assert!(matches!(
        add_employee(&mut persistence, &missing),
        Err(ApiError::InvalidInput { .. })
    ));
    assert!(list_employees(&mut persistence).unwrap().is_empty());
}

#[test]
fn test_get_unknown_employee() {
    let mut persistence = create_test_persistence();

    assert!(matches!(
        get_employee(&mut persistence, 404),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_delete_employee_reports_name_and_removes_shifts() {
    let mut persistence = create_test_persistence();
    let employee_id = create_test_employee(&mut persistence, "Bob", "10");
    let started = start_shift(&mut persistence, employee_id, at(9, 0)).unwrap();
    end_shift(&mut persistence, started.shift.shift_id, at(10, 0)).unwrap();
    start_shift(&mut persistence, employee_id, at(11, 0)).unwrap();

    let response = delete_employee(&mut persistence, employee_id).unwrap();

    assert_eq!(response.message, "Employee 'Bob' deleted");
    assert!(list_employees(&mut persistence).unwrap().is_empty());
    assert_eq!(
        persistence.count_shifts_for_employee(employee_id).unwrap(),
        0
    );
}

#[test]
fn test_delete_unknown_employee() {
    let mut persistence = create_test_persistence();

    assert!(matches!(
        delete_employee(&mut persistence, 3),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_list_with_status_pairs_open_shifts() {
    let mut persistence = create_test_persistence();
    let working = create_test_employee(&mut persistence, "Bob", "10");
    let idle = create_test_employee(&mut persistence, "Ann", "12");
    let started = start_shift(&mut persistence, working, at(8, 0)).unwrap();

    let response = list_employees_with_status(&mut persistence).unwrap();

    assert_eq!(response.employees.len(), 2);
    assert_eq!(response.employees[0].employee.employee_id(), Some(working));
    assert_eq!(response.employees[0].open_shift, Some(started.shift));
    assert_eq!(response.employees[1].employee.employee_id(), Some(idle));
    assert_eq!(response.employees[1].open_shift, None);
}
