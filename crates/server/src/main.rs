// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod pages;
mod session;

#[cfg(test)]
mod tests;

use axum::{
    Form, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use clap::Parser;
use shiftpay_api::{
    AddEmployeeRequest, ApiError, AuthenticationService, LoginRequest, LoginResponse,
    SalaryQuery, add_employee, bootstrap_admin, compute_salary, delete_employee, end_shift,
    list_employees_with_status, login, logout, purge_expired_sessions, set_flash, start_shift,
    take_flash,
};
use shiftpay_domain::PayPeriod;
use shiftpay_persistence::Persistence;
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::session::{SessionAccount, clear_session_cookie, session_cookie};

/// Password the admin account is seeded with unless configured otherwise.
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Shiftpay - employee shift tracking and payroll
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// How long a login stays valid, in hours
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(i64).range(1..))]
    session_hours: i64,

    /// Password for the admin account when it is first created
    #[arg(long, default_value = DEFAULT_ADMIN_PASSWORD)]
    admin_password: String,
}

/// Application state shared across handlers.
///
/// The persistence handle sits behind a mutex, so store access is
/// serialized across requests.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
    auth: AuthenticationService,
}

/// An error rendered as an HTML page.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The page heading.
    title: &'static str,
    /// The message shown to the user.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (
            self.status,
            Html(pages::error_page(self.title, &self.message)),
        )
            .into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { reason } => Self {
                status: StatusCode::UNAUTHORIZED,
                title: "Not signed in",
                message: reason,
            },
            ApiError::InvalidInput { message, .. } => Self {
                status: StatusCode::BAD_REQUEST,
                title: "Invalid request",
                message,
            },
            ApiError::ResourceNotFound { message, .. } => Self {
                status: StatusCode::NOT_FOUND,
                title: "Not found",
                message,
            },
            ApiError::Conflict { message, .. } => Self {
                status: StatusCode::CONFLICT,
                title: "Conflict",
                message,
            },
            ApiError::Internal { message } => {
                error!(%message, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    title: "Something went wrong",
                    message: String::from("The request could not be completed."),
                }
            }
        }
    }
}

/// Converts a failed operation into the status message shown after redirect.
fn flash_for_error(err: &ApiError) -> String {
    match err {
        ApiError::InvalidInput { message, .. } => format!("Invalid data: {message}"),
        ApiError::ResourceNotFound { message, .. } | ApiError::Conflict { message, .. } => {
            message.clone()
        }
        ApiError::AuthenticationFailed { .. } => String::from("Please sign in again"),
        ApiError::Internal { message } => {
            error!(%message, "Internal error");
            String::from("Something went wrong")
        }
    }
}

/// Stores `message` for the session's next page view and redirects home.
async fn redirect_home_with_flash(app_state: &AppState, token: &str, message: &str) -> Response {
    let mut persistence = app_state.persistence.lock().await;
    if let Err(e) = set_flash(&mut persistence, token, message) {
        warn!(error = %e, "Failed to store status message");
    }
    Redirect::to("/").into_response()
}

/// Sends the outcome of a redirecting operation back to the dashboard.
async fn finish_action<T>(
    app_state: &AppState,
    token: &str,
    result: Result<T, ApiError>,
    success_message: impl FnOnce(T) -> String,
) -> Response {
    let message: String = match result {
        Ok(value) => success_message(value),
        Err(e) => flash_for_error(&e),
    };
    redirect_home_with_flash(app_state, token, &message).await
}

/// Handler for GET `/login`.
async fn handle_login_page() -> Html<String> {
    Html(pages::login_page(None))
}

/// Handler for POST `/login`.
///
/// Purges expired sessions, then sets the session cookie and redirects home
/// on success; re-renders the form with a generic message otherwise.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Form(request): Form<LoginRequest>,
) -> Response {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut persistence = app_state.persistence.lock().await;
    if let Err(e) = purge_expired_sessions(&mut persistence, now) {
        error!(error = %e, "Failed to purge expired sessions");
    }
    let result: Result<LoginResponse, ApiError> =
        login(&mut persistence, &app_state.auth, &request, now);
    drop(persistence);

    match result {
        Ok(response) => {
            let cookie: String =
                session_cookie(&response.session_token, app_state.auth.session_lifetime());
            ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
        }
        Err(ApiError::AuthenticationFailed { reason }) => (
            StatusCode::UNAUTHORIZED,
            Html(pages::login_page(Some(&reason))),
        )
            .into_response(),
        Err(e) => HttpError::from(e).into_response(),
    }
}

/// Handler for GET `/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    session: SessionAccount,
) -> Response {
    let mut persistence = app_state.persistence.lock().await;
    if let Err(e) = logout(&mut persistence, &session.token) {
        error!(error = %e, "Failed to delete session");
    }
    drop(persistence);

    info!(username = %session.account.username, "Logged out");
    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Redirect::to("/login"),
    )
        .into_response()
}

/// Handler for GET `/`.
///
/// Lists employees with their shift status and shows any pending status
/// message.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    session: SessionAccount,
) -> Result<Html<String>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let flash: Option<String> = take_flash(&mut persistence, &session.token)?;
    let listing = list_employees_with_status(&mut persistence)?;
    drop(persistence);

    Ok(Html(pages::dashboard_page(
        &session.account.username,
        flash.as_deref(),
        &listing,
    )))
}

/// Handler for POST `/employee/add`.
async fn handle_add_employee(
    AxumState(app_state): AxumState<AppState>,
    session: SessionAccount,
    Form(request): Form<AddEmployeeRequest>,
) -> Response {
    let mut persistence = app_state.persistence.lock().await;
    let result = add_employee(&mut persistence, &request);
    drop(persistence);

    finish_action(&app_state, &session.token, result, |response| {
        response.message
    })
    .await
}

/// Handler for POST `/employee/delete/{employee_id}`.
async fn handle_delete_employee(
    AxumState(app_state): AxumState<AppState>,
    session: SessionAccount,
    Path(employee_id): Path<i64>,
) -> Response {
    let mut persistence = app_state.persistence.lock().await;
    let result = delete_employee(&mut persistence, employee_id);
    drop(persistence);

    finish_action(&app_state, &session.token, result, |response| {
        response.message
    })
    .await
}

/// Handler for GET `/work/start/{employee_id}`.
async fn handle_start_shift(
    AxumState(app_state): AxumState<AppState>,
    session: SessionAccount,
    Path(employee_id): Path<i64>,
) -> Response {
    let mut persistence = app_state.persistence.lock().await;
    let result = start_shift(&mut persistence, employee_id, OffsetDateTime::now_utc());
    drop(persistence);

    finish_action(&app_state, &session.token, result, |response| {
        response.message
    })
    .await
}

/// Handler for GET `/work/end/{shift_id}`.
async fn handle_end_shift(
    AxumState(app_state): AxumState<AppState>,
    session: SessionAccount,
    Path(shift_id): Path<i64>,
) -> Response {
    let mut persistence = app_state.persistence.lock().await;
    let result = end_shift(&mut persistence, shift_id, OffsetDateTime::now_utc());
    drop(persistence);

    finish_action(&app_state, &session.token, result, |response| {
        response.message
    })
    .await
}

/// Handler for GET `/salary/{employee_id}`.
async fn handle_salary(
    AxumState(app_state): AxumState<AppState>,
    _session: SessionAccount,
    Path(employee_id): Path<i64>,
    Query(query): Query<SalaryQuery>,
) -> Result<Html<String>, HttpError> {
    let period: PayPeriod = query.to_period().map_err(ApiError::from)?;

    let mut persistence = app_state.persistence.lock().await;
    let salary = compute_salary(&mut persistence, employee_id, &period)?;
    drop(persistence);

    Ok(Html(pages::salary_page(&salary, &query)))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", get(handle_login_page).post(handle_login))
        .route("/logout", get(handle_logout))
        .route("/", get(handle_dashboard))
        .route("/employee/add", post(handle_add_employee))
        .route("/employee/delete/{employee_id}", post(handle_delete_employee))
        .route("/work/start/{employee_id}", get(handle_start_shift))
        .route("/work/end/{shift_id}", get(handle_end_shift))
        .route("/salary/{employee_id}", get(handle_salary))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Shiftpay");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if bootstrap_admin(&mut persistence, &args.admin_password)?
        && args.admin_password == DEFAULT_ADMIN_PASSWORD
    {
        warn!("Admin account seeded with the default password; change it with --admin-password");
    }
    purge_expired_sessions(&mut persistence, OffsetDateTime::now_utc())?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        auth: AuthenticationService::new(Duration::hours(args.session_hours)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind((args.bind.as_str(), args.port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Run server
    axum::serve(listener, app).await?;

    Ok(())
}
