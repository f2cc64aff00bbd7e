// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rules for shift tracking and payroll.
//!
//! Nothing in this crate performs I/O or reads the clock. Timestamps are
//! always supplied by the caller.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod payroll;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use payroll::{PayrollSummary, SECONDS_PER_HOUR, compute_payroll};
pub use types::{Account, Employee, PayPeriod, ShiftRecord};
pub use validation::{
    parse_hourly_rate, validate_employee_fields, validate_full_name, validate_hourly_rate,
};
