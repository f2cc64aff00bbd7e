// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod types;

use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::ShiftRecord;

pub fn closed_shift(shift_id: i64, start: OffsetDateTime, end: OffsetDateTime) -> ShiftRecord {
    ShiftRecord {
        shift_id,
        employee_id: 1,
        start_time: start,
        end_time: Some(end),
    }
}

pub fn open_shift(shift_id: i64, start: OffsetDateTime) -> ShiftRecord {
    ShiftRecord {
        shift_id,
        employee_id: 1,
        start_time: start,
        end_time: None,
    }
}

/// 2026-03-02 at the given UTC hour and minute.
pub fn at(hour: u8, minute: u8) -> OffsetDateTime {
    datetime!(2026-03-02 00:00 UTC)
        + Duration::hours(i64::from(hour))
        + Duration::minutes(i64::from(minute))
}
