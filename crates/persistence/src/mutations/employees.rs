// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee registry mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftpay_domain::Employee;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{employees, shift_records};
use crate::error::PersistenceError;
use crate::queries::employees::require_employee;

/// Inserts a new employee.
///
/// Field validation is the caller's responsibility; the schema's `CHECK`
/// constraints reject anything that slips through.
///
/// # Returns
///
/// The stored employee, carrying its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_employee(
    conn: &mut SqliteConnection,
    employee: &Employee,
) -> Result<Employee, PersistenceError> {
    conn.immediate_transaction(|conn| {
        diesel::insert_into(employees::table)
            .values((
                employees::full_name.eq(employee.full_name()),
                employees::hourly_rate.eq(employee.hourly_rate()),
            ))
            .execute(conn)?;

        let employee_id: i64 = get_last_insert_rowid(conn)?;
        info!(
            employee_id,
            full_name = employee.full_name(),
            hourly_rate = employee.hourly_rate(),
            "Employee added"
        );

        Ok(Employee::with_id(
            employee_id,
            employee.full_name().to_string(),
            employee.hourly_rate(),
        ))
    })
}

/// Deletes an employee together with all of its shift records.
///
/// Both deletes happen in one transaction. The shift records are removed
/// explicitly; the `ON DELETE CASCADE` foreign key covers the same ground.
///
/// # Returns
///
/// The employee as it was before deletion.
///
/// # Errors
///
/// Returns `EmployeeNotFound` if no such employee exists, or an error if a
/// delete fails.
pub fn delete_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Employee, PersistenceError> {
    conn.immediate_transaction(|conn| {
        let employee: Employee = require_employee(conn, employee_id)?;

        let shifts_removed: usize = diesel::delete(shift_records::table)
            .filter(shift_records::employee_id.eq(employee_id))
            .execute(conn)?;

        diesel::delete(employees::table)
            .filter(employees::employee_id.eq(employee_id))
            .execute(conn)?;

        info!(employee_id, shifts_removed, "Employee deleted");
        Ok(employee)
    })
}
