// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations exposed to the web surface.
//!
//! Every function takes the `Persistence` handle explicitly and returns
//! `ApiError` on failure. Domain and persistence errors never cross this
//! boundary untranslated. Functions that depend on the current time take it
//! as an argument.

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{ADMIN_USERNAME, AuthenticatedAccount, AuthenticationService};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    add_employee, bootstrap_admin, closed_shifts_for, compute_salary, delete_employee, end_shift,
    get_employee, list_employees, list_employees_with_status, login, logout, open_shift_for,
    purge_expired_sessions, set_flash, start_shift, take_flash,
};
pub use request_response::{
    AddEmployeeRequest, AddEmployeeResponse, DeleteEmployeeResponse, EmployeeStatus,
    EndShiftResponse, ListEmployeesResponse, LoginRequest, LoginResponse, PeriodParseError,
    SalaryQuery, SalaryResponse, StartShiftResponse,
};
