// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, OffsetDateTime};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Employee full name is empty or invalid.
    InvalidFullName(String),
    /// Hourly rate is missing, non-numeric, or not positive.
    InvalidHourlyRate(f64),
    /// A shift cannot end before it started.
    ShiftEndsBeforeStart {
        /// When the shift started.
        start_time: OffsetDateTime,
        /// The rejected end time.
        end_time: OffsetDateTime,
    },
    /// The shift already has an end time.
    ShiftAlreadyClosed,
    /// A pay period whose start lies after its end.
    InvalidPeriod {
        /// First day of the period.
        from: Date,
        /// Last day of the period.
        to: Date,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFullName(msg) => write!(f, "Invalid full name: {msg}"),
            Self::InvalidHourlyRate(rate) => {
                write!(f, "Invalid hourly rate: {rate} (must be greater than zero)")
            }
            Self::ShiftEndsBeforeStart {
                start_time,
                end_time,
            } => write!(
                f,
                "Shift cannot end at {end_time} before it started at {start_time}"
            ),
            Self::ShiftAlreadyClosed => write!(f, "Shift has already ended"),
            Self::InvalidPeriod { from, to } => {
                write!(f, "Invalid period: {from} is after {to}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
