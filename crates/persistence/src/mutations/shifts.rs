// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift ledger mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use shiftpay_domain::{DomainError, ShiftRecord};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::shift_records;
use crate::error::PersistenceError;
use crate::queries::employees::require_employee;
use crate::queries::shifts::{get_open_shift, get_shift};
use crate::timestamps::format_timestamp;

/// Opens a new shift for an employee.
///
/// The open-shift check and the insert share one transaction. The partial
/// unique index on open shifts rejects any insert that races past the check.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_id` - The employee starting work
/// * `now` - The start timestamp
///
/// # Errors
///
/// Returns an error if:
/// - The employee does not exist (`EmployeeNotFound`)
/// - The employee already has an open shift (`ShiftAlreadyOpen`)
/// - The database operation fails
pub fn start_shift(
    conn: &mut SqliteConnection,
    employee_id: i64,
    now: OffsetDateTime,
) -> Result<ShiftRecord, PersistenceError> {
    let start_time: String = format_timestamp(now)?;

    conn.immediate_transaction(|conn| {
        require_employee(conn, employee_id)?;

        if let Some(open) = get_open_shift(conn, employee_id)? {
            debug!(
                employee_id,
                shift_id = open.shift_id,
                "Refusing to start shift: one is already open"
            );
            return Err(PersistenceError::ShiftAlreadyOpen { employee_id });
        }

        diesel::insert_into(shift_records::table)
            .values((
                shift_records::employee_id.eq(employee_id),
                shift_records::start_time.eq(&start_time),
            ))
            .execute(conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    PersistenceError::ShiftAlreadyOpen { employee_id }
                }
                other => PersistenceError::from(other),
            })?;

        let shift_id: i64 = get_last_insert_rowid(conn)?;
        info!(employee_id, shift_id, %start_time, "Shift started");

        get_shift(conn, shift_id)?.ok_or(PersistenceError::ShiftNotFound(shift_id))
    })
}

/// Closes an open shift.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `shift_id` - The shift to close
/// * `now` - The end timestamp
///
/// # Errors
///
/// Returns an error if:
/// - The shift does not exist (`ShiftNotFound`)
/// - The shift has already ended (`ShiftAlreadyClosed`)
/// - `now` lies before the shift's start (`DomainViolation`)
/// - The database operation fails
pub fn end_shift(
    conn: &mut SqliteConnection,
    shift_id: i64,
    now: OffsetDateTime,
) -> Result<ShiftRecord, PersistenceError> {
    let end_time: String = format_timestamp(now)?;

    conn.immediate_transaction(|conn| {
        let shift: ShiftRecord =
            get_shift(conn, shift_id)?.ok_or(PersistenceError::ShiftNotFound(shift_id))?;

        shift.validate_close(now).map_err(|e| match e {
            DomainError::ShiftAlreadyClosed => PersistenceError::ShiftAlreadyClosed(shift_id),
            other => PersistenceError::DomainViolation(other),
        })?;

        let rows_affected: usize = diesel::update(shift_records::table)
            .filter(shift_records::shift_id.eq(shift_id))
            .filter(shift_records::end_time.is_null())
            .set(shift_records::end_time.eq(&end_time))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::ShiftAlreadyClosed(shift_id));
        }

        info!(
            shift_id,
            employee_id = shift.employee_id,
            %end_time,
            "Shift ended"
        );

        get_shift(conn, shift_id)?.ok_or(PersistenceError::ShiftNotFound(shift_id))
    })
}
