// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift ledger queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftpay_domain::ShiftRecord;
use tracing::debug;

use crate::diesel_schema::shift_records;
use crate::error::PersistenceError;
use crate::timestamps::parse_timestamp;

/// Diesel Queryable struct for shift record rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = shift_records)]
struct ShiftRow {
    shift_id: i64,
    employee_id: i64,
    start_time: String,
    end_time: Option<String>,
}

impl TryFrom<ShiftRow> for ShiftRecord {
    type Error = PersistenceError;

    fn try_from(row: ShiftRow) -> Result<Self, Self::Error> {
        Ok(Self {
            shift_id: row.shift_id,
            employee_id: row.employee_id,
            start_time: parse_timestamp(&row.start_time)?,
            end_time: row.end_time.as_deref().map(parse_timestamp).transpose()?,
        })
    }
}

fn rows_to_records(rows: Vec<ShiftRow>) -> Result<Vec<ShiftRecord>, PersistenceError> {
    rows.into_iter().map(ShiftRecord::try_from).collect()
}

/// Retrieves a shift record by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored timestamp is invalid.
/// Returns `Ok(None)` if the record is not found.
pub fn get_shift(
    conn: &mut SqliteConnection,
    shift_id: i64,
) -> Result<Option<ShiftRecord>, PersistenceError> {
    debug!("Looking up shift by ID: {}", shift_id);

    shift_records::table
        .filter(shift_records::shift_id.eq(shift_id))
        .select(ShiftRow::as_select())
        .first::<ShiftRow>(conn)
        .optional()?
        .map(ShiftRecord::try_from)
        .transpose()
}

/// Retrieves the open shift for an employee, if any.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored timestamp is invalid.
pub fn get_open_shift(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<ShiftRecord>, PersistenceError> {
    shift_records::table
        .filter(shift_records::employee_id.eq(employee_id))
        .filter(shift_records::end_time.is_null())
        .select(ShiftRow::as_select())
        .first::<ShiftRow>(conn)
        .optional()?
        .map(ShiftRecord::try_from)
        .transpose()
}

/// Lists every open shift, ordered by employee.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored timestamp is invalid.
pub fn list_open_shifts(conn: &mut SqliteConnection) -> Result<Vec<ShiftRecord>, PersistenceError> {
    let rows: Vec<ShiftRow> = shift_records::table
        .filter(shift_records::end_time.is_null())
        .order(shift_records::employee_id.asc())
        .select(ShiftRow::as_select())
        .load(conn)?;

    rows_to_records(rows)
}

/// Lists the closed shifts of an employee in chronological order.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored timestamp is invalid.
pub fn list_closed_shifts(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Vec<ShiftRecord>, PersistenceError> {
    let rows: Vec<ShiftRow> = shift_records::table
        .filter(shift_records::employee_id.eq(employee_id))
        .filter(shift_records::end_time.is_not_null())
        .order((shift_records::start_time.asc(), shift_records::shift_id.asc()))
        .select(ShiftRow::as_select())
        .load(conn)?;

    debug!(
        employee_id,
        count = rows.len(),
        "Loaded closed shifts for employee"
    );
    rows_to_records(rows)
}

/// Counts all shift records, open or closed, referencing an employee.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_shifts_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<i64, PersistenceError> {
    Ok(shift_records::table
        .filter(shift_records::employee_id.eq(employee_id))
        .count()
        .get_result(conn)?)
}
