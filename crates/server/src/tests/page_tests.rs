// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::http::{HeaderMap, HeaderValue, header};
use shiftpay_api::{SalaryQuery, SalaryResponse};
use shiftpay_domain::{Employee, PayPeriod, PayrollSummary, ShiftRecord};
use time::Duration;
use time::macros::{date, datetime};

use crate::pages::{error_page, escape_html, login_page, salary_page};
use crate::session::{clear_session_cookie, session_cookie, session_token};

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<a href="x">O'Neil & Sons</a>"#),
        "&lt;a href=&quot;x&quot;&gt;O&#39;Neil &amp; Sons&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn test_login_page_error_is_escaped() {
    let page = login_page(Some("<b>nope</b>"));

    assert!(page.contains("&lt;b&gt;nope&lt;/b&gt;"));
}

#[test]
fn test_error_page() {
    let page = error_page("Not found", "Employee 3 does not exist");

    assert!(page.contains("<h1>Not found</h1>"));
    assert!(page.contains("Employee 3 does not exist"));
}

#[test]
fn test_session_cookie_format() {
    assert_eq!(
        session_cookie("abc", Duration::hours(12)),
        "shiftpay_session=abc; HttpOnly; SameSite=Lax; Path=/; Max-Age=43200"
    );
    assert!(clear_session_cookie().contains("Max-Age=0"));
}

#[test]
fn test_session_token_among_other_cookies() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; shiftpay_session=tok123; lang=en"),
    );

    assert_eq!(session_token(&headers), Some(String::from("tok123")));
}

#[test]
fn test_session_token_missing_or_empty() {
    let mut headers = HeaderMap::new();
    assert_eq!(session_token(&headers), None);

    headers.insert(header::COOKIE, HeaderValue::from_static("shiftpay_session="));
    assert_eq!(session_token(&headers), None);
}

#[test]
fn test_salary_page_describes_half_open_period() {
    let start = datetime!(2026-03-02 10:00 UTC);
    let salary = SalaryResponse {
        employee: Employee::with_id(1, String::from("Alice"), 20.0),
        period: PayPeriod::new(Some(date!(2026 - 03 - 01)), None).unwrap(),
        summary: PayrollSummary {
            hours: 1.5,
            pay: 30.0,
            shift_count: 1,
        },
        shifts: vec![ShiftRecord {
            shift_id: 1,
            employee_id: 1,
            start_time: start,
            end_time: Some(start + Duration::minutes(90)),
        }],
    };
    let query = SalaryQuery {
        from: Some(String::from("2026-03-01")),
        to: None,
    };

    let page = salary_page(&salary, &query);

    assert!(page.contains("between 2026-03-01 and the latest shift"));
    assert!(page.contains("<td>1.50</td>"));
    assert!(page.contains("<dt>Total pay</dt><dd>30.00</dd>"));
}

#[test]
fn test_salary_page_describes_upper_bound_only() {
    let salary = SalaryResponse {
        employee: Employee::with_id(2, String::from("Bob"), 10.0),
        period: PayPeriod::new(None, Some(date!(2026 - 03 - 31))).unwrap(),
        summary: PayrollSummary {
            hours: 0.0,
            pay: 0.0,
            shift_count: 0,
        },
        shifts: Vec::new(),
    };
    let query = SalaryQuery {
        from: None,
        to: Some(String::from("2026-03-31")),
    };

    let page = salary_page(&salary, &query);

    assert!(page.contains("between the first shift and 2026-03-31"));
    assert!(!page.contains("<table>"));
}
