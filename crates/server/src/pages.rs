// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Server-rendered HTML pages.
//!
//! Every value that originates from a request or the database goes through
//! `escape_html` before it is written into markup.

use std::fmt::Write;

use shiftpay_api::{EmployeeStatus, ListEmployeesResponse, SalaryQuery, SalaryResponse};
use shiftpay_domain::{SECONDS_PER_HOUR, ShiftRecord};
use time::OffsetDateTime;
use time::macros::format_description;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped: String = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn format_time(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute] UTC"
        ))
        .unwrap_or_else(|_| timestamp.to_string())
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | Shiftpay</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn flash_block(flash: Option<&str>) -> String {
    flash.map_or_else(String::new, |message| {
        format!("<p class=\"flash\">{}</p>\n", escape_html(message))
    })
}

/// The sign-in form, optionally with an error message above it.
pub fn login_page(error: Option<&str>) -> String {
    let body: String = format!(
        "<h1>Sign in</h1>\n{}\
         <form method=\"post\" action=\"/login\">\n\
         <label>Username <input type=\"text\" name=\"username\" required></label>\n\
         <label>Password <input type=\"password\" name=\"password\" required></label>\n\
         <button type=\"submit\">Sign in</button>\n\
         </form>\n",
        flash_block(error)
    );
    layout("Sign in", &body)
}

fn employee_row(status: &EmployeeStatus) -> String {
    let employee = &status.employee;
    let employee_id: i64 = employee.employee_id().unwrap_or_default();

    let (state, action): (String, String) = match &status.open_shift {
        Some(shift) => (
            format!("Working since {}", format_time(shift.start_time)),
            format!("<a href=\"/work/end/{}\">End shift</a>", shift.shift_id),
        ),
        None => (
            String::from("Not working"),
            format!("<a href=\"/work/start/{employee_id}\">Start shift</a>"),
        ),
    };

    format!(
        "<tr>\n<td>{name}</td>\n<td>{rate:.2}</td>\n<td>{state}</td>\n\
         <td>{action} <a href=\"/salary/{employee_id}\">Salary</a>\n\
         <form method=\"post\" action=\"/employee/delete/{employee_id}\" class=\"inline\">\
         <button type=\"submit\">Delete</button></form></td>\n</tr>\n",
        name = escape_html(employee.full_name()),
        rate = employee.hourly_rate(),
    )
}

/// The employee list with shift controls.
pub fn dashboard_page(
    username: &str,
    flash: Option<&str>,
    listing: &ListEmployeesResponse,
) -> String {
    let mut body: String = format!(
        "<header>Signed in as {} <a href=\"/logout\">Sign out</a></header>\n\
         <h1>Employees</h1>\n{}",
        escape_html(username),
        flash_block(flash)
    );

    if listing.employees.is_empty() {
        body.push_str("<p>No employees yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>Name</th><th>Hourly rate</th><th>Status</th><th></th></tr>\n",
        );
        for status in &listing.employees {
            body.push_str(&employee_row(status));
        }
        body.push_str("</table>\n");
    }

    body.push_str(
        "<h2>Add employee</h2>\n\
         <form method=\"post\" action=\"/employee/add\">\n\
         <label>Full name <input type=\"text\" name=\"full_name\" required></label>\n\
         <label>Hourly rate <input type=\"number\" name=\"hourly_rate\" step=\"0.01\" min=\"0.01\" required></label>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
    );

    layout("Employees", &body)
}

fn shift_row(shift: &ShiftRecord) -> String {
    let hours: f64 = shift
        .duration()
        .map_or(0.0, |duration| duration.as_seconds_f64() / SECONDS_PER_HOUR);
    let end: String = shift.end_time.map_or_else(String::new, format_time);

    format!(
        "<tr><td>{}</td><td>{end}</td><td>{hours:.2}</td></tr>\n",
        format_time(shift.start_time)
    )
}

/// Hours, pay, and the counted shifts for one employee.
pub fn salary_page(salary: &SalaryResponse, query: &SalaryQuery) -> String {
    let name: String = escape_html(salary.employee.full_name());
    let from: String = escape_html(query.from.as_deref().unwrap_or_default());
    let to: String = escape_html(query.to.as_deref().unwrap_or_default());

    let mut body: String = format!(
        "<p><a href=\"/\">Back to employees</a></p>\n\
         <h1>Salary for {name}</h1>\n\
         <form method=\"get\" action=\"/salary/{id}\">\n\
         <label>From <input type=\"date\" name=\"from\" value=\"{from}\"></label>\n\
         <label>To <input type=\"date\" name=\"to\" value=\"{to}\"></label>\n\
         <button type=\"submit\">Show</button>\n\
         </form>\n\
         <dl>\n\
         <dt>Hourly rate</dt><dd>{rate:.2}</dd>\n\
         <dt>Hours worked</dt><dd>{hours:.2}</dd>\n\
         <dt>Total pay</dt><dd>{pay:.2}</dd>\n\
         </dl>\n",
        id = salary.employee.employee_id().unwrap_or_default(),
        rate = salary.employee.hourly_rate(),
        hours = salary.summary.hours,
        pay = salary.summary.pay,
    );

    if salary.period.is_lifetime() {
        body.push_str("<p>All completed shifts.</p>\n");
    } else {
        let _ = writeln!(
            body,
            "<p>Completed shifts started between {} and {}.</p>",
            salary
                .period
                .from()
                .map_or_else(|| String::from("the first shift"), |day| day.to_string()),
            salary
                .period
                .to()
                .map_or_else(|| String::from("the latest shift"), |day| day.to_string()),
        );
    }

    if !salary.shifts.is_empty() {
        body.push_str("<table>\n<tr><th>Start</th><th>End</th><th>Hours</th></tr>\n");
        for shift in &salary.shifts {
            body.push_str(&shift_row(shift));
        }
        body.push_str("</table>\n");
    }

    layout(&format!("Salary: {}", salary.employee.full_name()), &body)
}

/// A generic error page.
pub fn error_page(title: &str, message: &str) -> String {
    let body: String = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to employees</a></p>\n",
        escape_html(title),
        escape_html(message)
    );
    layout(title, &body)
}
