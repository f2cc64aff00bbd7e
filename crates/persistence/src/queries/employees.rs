// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee registry queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftpay_domain::Employee;
use tracing::debug;

use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Diesel Queryable struct for employee rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeRow {
    employee_id: i64,
    full_name: String,
    hourly_rate: f64,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self::with_id(row.employee_id, row.full_name, row.hourly_rate)
    }
}

/// Lists all employees in insertion (id) order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(conn: &mut SqliteConnection) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .order(employees::employee_id.asc())
        .select(EmployeeRow::as_select())
        .load(conn)?;

    debug!("Loaded {} employees", rows.len());
    Ok(rows.into_iter().map(Employee::from).collect())
}

/// Retrieves an employee by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn get_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<Employee>, PersistenceError> {
    debug!("Looking up employee by ID: {}", employee_id);

    let row: Option<EmployeeRow> = employees::table
        .filter(employees::employee_id.eq(employee_id))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Employee::from))
}

/// Retrieves an employee by ID, failing when it does not exist.
///
/// # Errors
///
/// Returns `EmployeeNotFound` if no such employee exists, or an error if the
/// database query fails.
pub fn require_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Employee, PersistenceError> {
    get_employee(conn, employee_id)?.ok_or(PersistenceError::EmployeeNotFound(employee_id))
}
