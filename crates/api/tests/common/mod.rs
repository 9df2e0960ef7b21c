#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use forensic_api::auth::password::hash_password;
use forensic_api::config::{ServerConfig, SessionConfig};
use forensic_api::router::build_app_router;
use forensic_api::state::AppState;
use forensic_db::models::user::{CreateUser, User};
use forensic_db::repositories::UserRepo;

/// Password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
///
/// Static files come from `tests/fixtures/static`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/static"),
        session: SessionConfig::default(),
        bootstrap_admin: None,
    }
}

/// Build the full application router, with every middleware layer, over
/// the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(cookie), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(cookie), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(cookie), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(cookie), None).await
}

/// POST a raw body, optionally without a `Content-Type` header.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `name=value` pair of the session cookie set by `response`, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let name = SessionConfig::default().cookie_name;
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| {
            pair.split_once('=')
                .is_some_and(|(n, value)| n == name && !value.is_empty())
        })
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Users and sessions
// ---------------------------------------------------------------------------

/// Insert a user with [`TEST_PASSWORD`] directly through the repository.
pub async fn create_user(pool: &PgPool, email: &str, role: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            full_name: format!("User {email}"),
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
            role: role.to_string(),
        },
    )
    .await
    .unwrap()
}

/// Log in through the API and return the session cookie (`name=value`).
pub async fn login_as(app: Router, email: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK, "login should succeed");
    session_cookie(&response).expect("login sets the session cookie")
}

/// Create a user with `role` and return a live session cookie for them.
pub async fn session_for(pool: &PgPool, app: Router, email: &str, role: &str) -> String {
    create_user(pool, email, role).await;
    login_as(app, email, TEST_PASSWORD).await
}

/// Session cookie for a fresh lawyer account.
pub async fn lawyer_session(pool: &PgPool, app: Router) -> String {
    session_for(pool, app, "lawyer@test.com", "lawyer").await
}

/// Session cookie for a fresh admin account.
pub async fn admin_session(pool: &PgPool, app: Router) -> String {
    session_for(pool, app, "admin@test.com", "admin").await
}

// ---------------------------------------------------------------------------
// Fixtures through the API
// ---------------------------------------------------------------------------

/// Create a client through the API and return its id.
pub async fn create_client(app: Router, cookie: &str, full_name: &str, email: &str) -> i64 {
    let response = post_json_auth(
        app,
        "/api/clients",
        cookie,
        serde_json::json!({ "full_name": full_name, "email": email }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["client"]["id"].as_i64().unwrap()
}

/// Create a case through the API and return the JSON `case` object.
pub async fn create_case(
    app: Router,
    cookie: &str,
    case_number: &str,
    client_id: i64,
    status: &str,
) -> serde_json::Value {
    let response = post_json_auth(
        app,
        "/api/cases",
        cookie,
        serde_json::json!({
            "case_number": case_number,
            "title": format!("Case {case_number}"),
            "client_id": client_id,
            "status": status,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["case"].clone()
}
