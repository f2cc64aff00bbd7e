// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};

/// The administrative account that may sign in to the application.
///
/// The password hash never leaves the persistence layer; this record only
/// carries the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The canonical numeric identifier assigned by the database.
    pub account_id: i64,
    /// The login name (exact, case-sensitive).
    pub username: String,
}

/// An hourly employee.
///
/// An `Employee` without an id has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The canonical numeric identifier assigned by the database.
    employee_id: Option<i64>,
    /// The employee's full name.
    full_name: String,
    /// Pay per hour worked.
    hourly_rate: f64,
}

impl Employee {
    /// Creates a new, not yet persisted employee.
    ///
    /// No validation happens here; see `validate_employee_fields`.
    ///
    /// # Arguments
    ///
    /// * `full_name` - The employee's full name
    /// * `hourly_rate` - Pay per hour worked
    #[must_use]
    pub fn new(full_name: &str, hourly_rate: f64) -> Self {
        Self {
            employee_id: None,
            full_name: full_name.trim().to_string(),
            hourly_rate,
        }
    }

    /// Creates an employee with an existing persisted ID.
    #[must_use]
    pub const fn with_id(employee_id: i64, full_name: String, hourly_rate: f64) -> Self {
        Self {
            employee_id: Some(employee_id),
            full_name,
            hourly_rate,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn employee_id(&self) -> Option<i64> {
        self.employee_id
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub const fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }
}

/// A single work interval for an employee.
///
/// A record is created open (no end time) and closed exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The canonical numeric identifier assigned by the database.
    pub shift_id: i64,
    /// The employee this shift belongs to.
    pub employee_id: i64,
    /// When the shift started (UTC).
    pub start_time: OffsetDateTime,
    /// When the shift ended, `None` while the shift is open.
    pub end_time: Option<OffsetDateTime>,
}

impl ShiftRecord {
    /// Returns whether the shift is still running.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Returns the worked duration of a closed shift, or `None` while open.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// Checks that this shift may be closed at `end_time`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The shift already has an end time
    /// - `end_time` lies before the start time
    pub fn validate_close(&self, end_time: OffsetDateTime) -> Result<(), DomainError> {
        if self.end_time.is_some() {
            return Err(DomainError::ShiftAlreadyClosed);
        }
        if end_time < self.start_time {
            return Err(DomainError::ShiftEndsBeforeStart {
                start_time: self.start_time,
                end_time,
            });
        }
        Ok(())
    }
}

/// An inclusive range of calendar days used to narrow a payroll computation.
///
/// Either bound may be omitted. A shift belongs to the period when the UTC
/// date of its start lies within the bounds. The default period is
/// unbounded, which yields lifetime totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    from: Option<Date>,
    to: Option<Date>,
}

impl PayPeriod {
    /// Creates a new pay period.
    ///
    /// # Errors
    ///
    /// Returns an error if both bounds are present and `from` is after `to`.
    pub fn new(from: Option<Date>, to: Option<Date>) -> Result<Self, DomainError> {
        match (from, to) {
            (Some(from), Some(to)) if from > to => Err(DomainError::InvalidPeriod { from, to }),
            _ => Ok(Self { from, to }),
        }
    }

    /// The unbounded period covering every shift ever recorded.
    #[must_use]
    pub const fn lifetime() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    #[must_use]
    pub const fn from(&self) -> Option<Date> {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> Option<Date> {
        self.to
    }

    /// Returns whether no bound is set.
    #[must_use]
    pub const fn is_lifetime(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Returns whether a shift starting at `start_time` falls inside the period.
    #[must_use]
    pub fn contains(&self, start_time: OffsetDateTime) -> bool {
        let day: Date = start_time.date();
        self.from.is_none_or(|from| day >= from) && self.to.is_none_or(|to| day <= to)
    }
}
