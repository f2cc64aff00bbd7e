// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API layer.
//!
//! Requests mirror the submitted form fields as raw strings; conversion and
//! validation happen in the handlers.

use serde::{Deserialize, Serialize};
use shiftpay_domain::{DomainError, Employee, PayPeriod, PayrollSummary, ShiftRecord};
use thiserror::Error;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Login form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The account's login name.
    #[serde(default)]
    pub username: String,
    /// The plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The opaque session token to hand back to the client.
    pub session_token: String,
    /// The authenticated login name.
    pub username: String,
    /// When the session stops being accepted.
    pub expires_at: OffsetDateTime,
}

/// Add-employee form submission.
///
/// A missing or non-numeric `hourly_rate` is not a parse error; it fails
/// the rate validation instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddEmployeeRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub hourly_rate: Option<String>,
}

/// Response for a created employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddEmployeeResponse {
    /// The stored employee.
    pub employee: Employee,
    /// A success message.
    pub message: String,
}

/// Response for a deleted employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteEmployeeResponse {
    /// The employee as it was before deletion.
    pub employee: Employee,
    /// A success message.
    pub message: String,
}

/// One dashboard row: an employee and their running shift, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStatus {
    pub employee: Employee,
    pub open_shift: Option<ShiftRecord>,
}

/// Response for the dashboard listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    /// All employees in ID order.
    pub employees: Vec<EmployeeStatus>,
}

/// Response for a started shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartShiftResponse {
    pub shift: ShiftRecord,
    pub employee: Employee,
    pub message: String,
}

/// Response for an ended shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndShiftResponse {
    pub shift: ShiftRecord,
    pub message: String,
}

/// Errors from interpreting the salary page's period parameters.
#[derive(Debug, Error, PartialEq)]
pub enum PeriodParseError {
    /// A bound is not a `YYYY-MM-DD` date.
    #[error("Invalid {field} date '{value}': expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    /// Both bounds parsed but `from` is after `to`.
    #[error("{0}")]
    Inverted(DomainError),
}

/// Optional period bounds for the salary page.
///
/// Empty strings count as absent, which is what an untouched date input
/// submits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl SalaryQuery {
    /// Converts the raw bounds into a pay period.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not a valid date or the bounds are
    /// inverted.
    pub fn to_period(&self) -> Result<PayPeriod, PeriodParseError> {
        let from: Option<Date> = parse_bound("from", self.from.as_deref())?;
        let to: Option<Date> = parse_bound("to", self.to.as_deref())?;
        PayPeriod::new(from, to).map_err(PeriodParseError::Inverted)
    }
}

fn parse_bound(field: &'static str, raw: Option<&str>) -> Result<Option<Date>, PeriodParseError> {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|_| PeriodParseError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

/// Salary page data for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryResponse {
    pub employee: Employee,
    /// The period the totals cover.
    pub period: PayPeriod,
    /// Hours and pay over the closed shifts in `period`.
    pub summary: PayrollSummary,
    /// The closed shifts that were counted, oldest first.
    pub shifts: Vec<ShiftRecord>,
}
