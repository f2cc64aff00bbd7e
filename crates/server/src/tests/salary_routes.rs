// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::http::StatusCode;
use shiftpay_api::{AddEmployeeRequest, add_employee, end_shift, start_shift};
use time::macros::datetime;

use super::{body_text, create_test_app, get, login_cookie};
use crate::AppState;

/// Adds Bob at rate 20 with shifts 10:00-10:30 and 14:00-15:00 on
/// 2026-03-02. Returns Bob's ID.
async fn seed_worked_shifts(app_state: &AppState) -> i64 {
    let mut persistence = app_state.persistence.lock().await;
    let employee_id = add_employee(
        &mut persistence,
        &AddEmployeeRequest {
            full_name: String::from("Bob"),
            hourly_rate: Some(String::from("20")),
        },
    )
    .unwrap()
    .employee
    .employee_id()
    .unwrap();

    for (start, end) in [
        (datetime!(2026-03-02 10:00 UTC), datetime!(2026-03-02 10:30 UTC)),
        (datetime!(2026-03-02 14:00 UTC), datetime!(2026-03-02 15:00 UTC)),
    ] {
        let started = start_shift(&mut persistence, employee_id, start).unwrap();
        end_shift(&mut persistence, started.shift.shift_id, end).unwrap();
    }

    start_shift(&mut persistence, employee_id, datetime!(2026-03-03 09:00 UTC)).unwrap();

    employee_id
}

#[tokio::test]
async fn test_salary_page_totals() {
    let (app_state, app) = create_test_app();
    let employee_id = seed_worked_shifts(&app_state).await;
    let cookie = login_cookie(&app).await;

    let response = get(&app, &format!("/salary/{employee_id}"), Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Salary for Bob"));
    assert!(body.contains("<dt>Hours worked</dt><dd>1.50</dd>"));
    assert!(body.contains("<dt>Total pay</dt><dd>30.00</dd>"));
    assert!(body.contains("2026-03-02 10:00 UTC"));
    // The open shift is not listed
    assert!(!body.contains("2026-03-03 09:00 UTC"));
}

#[tokio::test]
async fn test_salary_page_with_period() {
    let (app_state, app) = create_test_app();
    let employee_id = seed_worked_shifts(&app_state).await;
    let cookie = login_cookie(&app).await;

    let response = get(
        &app,
        &format!("/salary/{employee_id}?from=2026-03-03&to=2026-03-31"),
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<dt>Hours worked</dt><dd>0.00</dd>"));
    assert!(body.contains("value=\"2026-03-03\""));
}

#[tokio::test]
async fn test_salary_page_empty_period_fields() {
    let (app_state, app) = create_test_app();
    let employee_id = seed_worked_shifts(&app_state).await;
    let cookie = login_cookie(&app).await;

    let response = get(
        &app,
        &format!("/salary/{employee_id}?from=&to="),
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("<dd>30.00</dd>"));
}

#[tokio::test]
async fn test_salary_page_bad_period() {
    let (app_state, app) = create_test_app();
    let employee_id = seed_worked_shifts(&app_state).await;
    let cookie = login_cookie(&app).await;

    let inverted = get(
        &app,
        &format!("/salary/{employee_id}?from=2026-03-31&to=2026-03-01"),
        Some(&cookie),
    )
    .await;
    assert_eq!(inverted.status(), StatusCode::BAD_REQUEST);

    let malformed = get(
        &app,
        &format!("/salary/{employee_id}?from=yesterday"),
        Some(&cookie),
    )
    .await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_salary_page_unknown_employee() {
    let (_, app) = create_test_app();
    let cookie = login_cookie(&app).await;

    let response = get(&app, "/salary/999", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Employee 999 does not exist"));
}
