// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::collections::HashMap;

use shiftpay_domain::{
    Employee, PayPeriod, PayrollSummary, ShiftRecord, compute_payroll, parse_hourly_rate,
    validate_employee_fields,
};
use shiftpay_persistence::Persistence;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::auth::{ADMIN_USERNAME, AuthenticationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AddEmployeeRequest, AddEmployeeResponse, DeleteEmployeeResponse, EmployeeStatus,
    EndShiftResponse, ListEmployeesResponse, LoginRequest, LoginResponse, SalaryResponse,
    StartShiftResponse,
};

// ============================================================================
// Sessions
// ============================================================================

/// Seeds the admin account unless it already exists.
///
/// # Returns
///
/// `true` if the account was created by this call.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn bootstrap_admin(persistence: &mut Persistence, password: &str) -> Result<bool, ApiError> {
    let created: bool = persistence
        .ensure_account(ADMIN_USERNAME, password)
        .map_err(translate_persistence_error)?;

    if created {
        info!(username = ADMIN_USERNAME, "Admin account created");
    } else {
        debug!(username = ADMIN_USERNAME, "Admin account already exists");
    }

    Ok(created)
}

/// Authenticates and opens a session.
///
/// # Errors
///
/// Returns `AuthenticationFailed` for bad credentials.
pub fn login(
    persistence: &mut Persistence,
    auth: &AuthenticationService,
    request: &LoginRequest,
    now: OffsetDateTime,
) -> Result<LoginResponse, ApiError> {
    let (session_token, account, expires_at) =
        auth.login(persistence, &request.username, &request.password, now)?;

    Ok(LoginResponse {
        session_token,
        username: account.username,
        expires_at,
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Removes every session that expired before `now`.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn purge_expired_sessions(
    persistence: &mut Persistence,
    now: OffsetDateTime,
) -> Result<usize, ApiError> {
    let removed: usize = persistence
        .delete_expired_sessions(now)
        .map_err(translate_persistence_error)?;
    if removed > 0 {
        info!(removed, "Purged expired sessions");
    }
    Ok(removed)
}

/// Queues a status message for the session's next page view.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the session does not exist.
pub fn set_flash(
    persistence: &mut Persistence,
    session_token: &str,
    message: &str,
) -> Result<(), ApiError> {
    persistence
        .set_flash_message(session_token, message)
        .map_err(translate_persistence_error)
}

/// Returns and clears the session's pending status message.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the session does not exist.
pub fn take_flash(
    persistence: &mut Persistence,
    session_token: &str,
) -> Result<Option<String>, ApiError> {
    persistence
        .take_flash_message(session_token)
        .map_err(translate_persistence_error)
}

// ============================================================================
// Employee Registry
// ============================================================================

/// Lists all employees in ID order.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_employees(persistence: &mut Persistence) -> Result<Vec<Employee>, ApiError> {
    persistence
        .list_employees()
        .map_err(translate_persistence_error)
}

/// Lists all employees together with their open shift, if any.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_employees_with_status(
    persistence: &mut Persistence,
) -> Result<ListEmployeesResponse, ApiError> {
    let employees: Vec<Employee> = list_employees(persistence)?;
    let mut open_shifts: HashMap<i64, ShiftRecord> = persistence
        .list_open_shifts()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|shift| (shift.employee_id, shift))
        .collect();

    let employees: Vec<EmployeeStatus> = employees
        .into_iter()
        .map(|employee| {
            let open_shift: Option<ShiftRecord> = employee
                .employee_id()
                .and_then(|employee_id| open_shifts.remove(&employee_id));
            EmployeeStatus {
                employee,
                open_shift,
            }
        })
        .collect();

    Ok(ListEmployeesResponse { employees })
}

/// Retrieves one employee.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no such employee exists.
pub fn get_employee(persistence: &mut Persistence, employee_id: i64) -> Result<Employee, ApiError> {
    persistence
        .get_employee(employee_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {employee_id} does not exist"),
        })
}

/// Adds an employee from raw form input.
///
/// The name is trimmed. A missing or non-numeric rate is treated as zero
/// and therefore rejected by the rate check.
///
/// # Errors
///
/// Returns `InvalidInput` if the name is empty or the rate is not positive.
pub fn add_employee(
    persistence: &mut Persistence,
    request: &AddEmployeeRequest,
) -> Result<AddEmployeeResponse, ApiError> {
    let hourly_rate: f64 = parse_hourly_rate(request.hourly_rate.as_deref());
    let employee: Employee = Employee::new(&request.full_name, hourly_rate);

    validate_employee_fields(&employee).map_err(translate_domain_error)?;

    let employee: Employee = persistence
        .insert_employee(&employee)
        .map_err(translate_persistence_error)?;

    Ok(AddEmployeeResponse {
        employee,
        message: String::from("Employee added"),
    })
}

/// Deletes an employee and every shift record that references them.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no such employee exists.
pub fn delete_employee(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<DeleteEmployeeResponse, ApiError> {
    let employee: Employee = persistence
        .delete_employee(employee_id)
        .map_err(translate_persistence_error)?;
    let message: String = format!("Employee '{}' deleted", employee.full_name());

    Ok(DeleteEmployeeResponse { employee, message })
}

// ============================================================================
// Shift Ledger
// ============================================================================

/// Returns the employee's open shift, if any.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn open_shift_for(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<Option<ShiftRecord>, ApiError> {
    persistence
        .get_open_shift(employee_id)
        .map_err(translate_persistence_error)
}

/// Starts a shift for an employee at `now`.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown employee, or `Conflict` if the
/// employee already has an open shift.
pub fn start_shift(
    persistence: &mut Persistence,
    employee_id: i64,
    now: OffsetDateTime,
) -> Result<StartShiftResponse, ApiError> {
    let shift: ShiftRecord = persistence
        .start_shift(employee_id, now)
        .map_err(translate_persistence_error)?;
    let employee: Employee = get_employee(persistence, employee_id)?;
    let message: String = format!("Shift for {} started", employee.full_name());

    Ok(StartShiftResponse {
        shift,
        employee,
        message,
    })
}

/// Ends a shift at `now`.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift, `Conflict` if it has
/// already ended, or `InvalidInput` if `now` precedes its start.
pub fn end_shift(
    persistence: &mut Persistence,
    shift_id: i64,
    now: OffsetDateTime,
) -> Result<EndShiftResponse, ApiError> {
    let shift: ShiftRecord = persistence
        .end_shift(shift_id, now)
        .map_err(translate_persistence_error)?;

    Ok(EndShiftResponse {
        shift,
        message: String::from("Shift ended"),
    })
}

/// Returns the employee's closed shifts inside `period`, oldest first.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn closed_shifts_for(
    persistence: &mut Persistence,
    employee_id: i64,
    period: &PayPeriod,
) -> Result<Vec<ShiftRecord>, ApiError> {
    let shifts: Vec<ShiftRecord> = persistence
        .list_closed_shifts(employee_id)
        .map_err(translate_persistence_error)?;

    Ok(shifts
        .into_iter()
        .filter(|shift| period.contains(shift.start_time))
        .collect())
}

// ============================================================================
// Payroll
// ============================================================================

/// Computes hours and pay for an employee over `period`.
///
/// Pass `PayPeriod::lifetime()` for totals over every closed shift.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no such employee exists.
pub fn compute_salary(
    persistence: &mut Persistence,
    employee_id: i64,
    period: &PayPeriod,
) -> Result<SalaryResponse, ApiError> {
    let employee: Employee = get_employee(persistence, employee_id)?;
    let shifts: Vec<ShiftRecord> = closed_shifts_for(persistence, employee_id, period)?;
    let summary: PayrollSummary = compute_payroll(employee.hourly_rate(), &shifts, period);

    debug!(
        employee_id,
        hours = summary.hours,
        pay = summary.pay,
        shift_count = summary.shift_count,
        "Computed salary"
    );

    Ok(SalaryResponse {
        employee,
        period: *period,
        summary,
        shifts,
    })
}
