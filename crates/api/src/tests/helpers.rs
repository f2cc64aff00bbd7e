// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use shiftpay_persistence::Persistence;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::{AddEmployeeRequest, add_employee, bootstrap_admin};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Creates a persistence handle with the admin account seeded.
pub fn create_bootstrapped_persistence(password: &str) -> Persistence {
    let mut persistence: Persistence = create_test_persistence();
    bootstrap_admin(&mut persistence, password).expect("Failed to seed admin");
    persistence
}

pub fn create_add_request(full_name: &str, hourly_rate: &str) -> AddEmployeeRequest {
    AddEmployeeRequest {
        full_name: String::from(full_name),
        hourly_rate: Some(String::from(hourly_rate)),
    }
}

/// Adds an employee through the API and returns its ID.
pub fn create_test_employee(persistence: &mut Persistence, full_name: &str, rate: &str) -> i64 {
    add_employee(persistence, &create_add_request(full_name, rate))
        .expect("Failed to add employee")
        .employee
        .employee_id()
        .expect("Stored employee has an ID")
}

/// Monday 2026-03-02 at the given time of day (UTC).
pub fn at(hour: i64, minute: i64) -> OffsetDateTime {
    datetime!(2026-03-02 00:00 UTC) + Duration::hours(hour) + Duration::minutes(minute)
}
