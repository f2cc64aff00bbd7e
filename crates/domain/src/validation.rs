// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Employee;

/// Sentinel used when the submitted hourly rate cannot be read as a number.
///
/// It deliberately fails `validate_hourly_rate`.
const UNPARSEABLE_RATE: f64 = 0.0;

/// Reads a raw hourly rate as submitted by a form.
///
/// Missing, empty, or non-numeric input yields a rate of zero, which is then
/// rejected by `validate_hourly_rate`. Parsing never fails on its own.
///
/// # Arguments
///
/// * `raw` - The raw form value, if any
#[must_use]
pub fn parse_hourly_rate(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(UNPARSEABLE_RATE)
}

/// Validates an employee's full name.
///
/// # Errors
///
/// Returns an error if the name is empty or consists only of whitespace.
pub fn validate_full_name(full_name: &str) -> Result<(), DomainError> {
    if full_name.trim().is_empty() {
        return Err(DomainError::InvalidFullName(String::from(
            "Full name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates an hourly rate.
///
/// # Errors
///
/// Returns an error if the rate is not a finite number greater than zero.
pub fn validate_hourly_rate(hourly_rate: f64) -> Result<(), DomainError> {
    // NaN fails both comparisons, so check finiteness explicitly
    if !hourly_rate.is_finite() || hourly_rate <= 0.0 {
        return Err(DomainError::InvalidHourlyRate(hourly_rate));
    }
    Ok(())
}

/// Validates that an employee's field constraints are met.
///
/// # Arguments
///
/// * `employee` - The employee to validate
///
/// # Errors
///
/// Returns an error if:
/// - The full name is empty
/// - The hourly rate is not positive
pub fn validate_employee_fields(employee: &Employee) -> Result<(), DomainError> {
    validate_full_name(employee.full_name())?;
    validate_hourly_rate(employee.hourly_rate())?;
    Ok(())
}
