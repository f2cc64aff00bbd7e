// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the persistence crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod account_tests;

use shiftpay_domain::Employee;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Adds an employee and returns its ID.
pub fn add_test_employee(persistence: &mut Persistence, name: &str, rate: f64) -> i64 {
    persistence
        .insert_employee(&Employee::new(name, rate))
        .unwrap()
        .employee_id()
        .expect("persisted employee has an ID")
}

/// A fixed reference instant for tests.
pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-02 09:00 UTC)
}
