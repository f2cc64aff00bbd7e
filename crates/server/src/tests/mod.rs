// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Router and rendering tests for the server.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod page_tests;
mod salary_routes;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use shiftpay_api::{AuthenticationService, bootstrap_admin};
use shiftpay_persistence::Persistence;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::{AppState, build_router};

/// Helper to create test app state with in-memory persistence and the
/// admin account seeded with password `admin`.
pub fn create_test_app_state() -> AppState {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    bootstrap_admin(&mut persistence, "admin").expect("Failed to seed admin");
    AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        auth: AuthenticationService::default(),
    }
}

pub fn create_test_app() -> (AppState, Router) {
    let app_state: AppState = create_test_app_state();
    let app: Router = build_router(app_state.clone());
    (app_state, app)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_form(
    app: &Router,
    uri: &str,
    cookie: Option<&str>,
    form: &str,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::from(form.to_string())).unwrap()).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect has a Location header")
        .to_str()
        .unwrap()
}

/// Signs in as admin and returns the `name=value` cookie pair.
pub async fn login_cookie(app: &Router) -> String {
    let response = post_form(app, "/login", None, "username=admin&password=admin").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login sets a cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// Follows a redirect home and returns the rendered dashboard.
pub async fn dashboard(app: &Router, cookie: &str) -> String {
    let response = get(app, "/", Some(cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_text(response).await
}
