// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payroll computation over closed shifts.

use serde::{Deserialize, Serialize};

use crate::types::{PayPeriod, ShiftRecord};

/// Number of seconds in one paid hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Worked time and pay derived from an employee's closed shifts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Total worked hours across the counted shifts.
    pub hours: f64,
    /// `hours` multiplied by the hourly rate.
    pub pay: f64,
    /// How many closed shifts contributed to the totals.
    pub shift_count: usize,
}

/// Computes worked hours and pay for a set of shifts.
///
/// Only closed shifts that start inside `period` are counted. Open shifts
/// contribute nothing, not even partial hours.
///
/// # Arguments
///
/// * `hourly_rate` - Pay per hour worked
/// * `shifts` - The employee's shift records, in any order
/// * `period` - Restricts which shifts are counted
#[must_use]
pub fn compute_payroll(hourly_rate: f64, shifts: &[ShiftRecord], period: &PayPeriod) -> PayrollSummary {
    let (total_seconds, shift_count): (f64, usize) = shifts
        .iter()
        .filter(|shift| period.contains(shift.start_time))
        .filter_map(ShiftRecord::duration)
        .fold((0.0, 0), |(seconds, count), duration| {
            (seconds + duration.as_seconds_f64(), count + 1)
        });

    let hours: f64 = total_seconds / SECONDS_PER_HOUR;

    PayrollSummary {
        hours,
        pay: hours * hourly_rate,
        shift_count,
    }
}
