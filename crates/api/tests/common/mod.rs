#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gasbook_api::auth::jwt::{generate_access_token, JwtConfig};
use gasbook_api::auth::password::hash_password;
use gasbook_api::config::ServerConfig;
use gasbook_api::router::build_app_router;
use gasbook_api::state::AppState;
use gasbook_db::models::user::{CreateUser, User};
use gasbook_db::repositories::UserRepo;
use gasbook_notify::Notifier;

/// Password used for every seeded account.
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This reuses the production router builder so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that the binary uses. E-mail is left unconfigured, so
/// notifications are silently skipped.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier: Arc::new(Notifier::new(None)),
    };
    build_app_router(state, &config)
}

/// Insert a user directly and mint an access token for them.
///
/// Goes through [`UserRepo`] rather than the register endpoint so tests can
/// seed admins (registration never grants the admin role).
pub async fn seed_user(pool: &PgPool, email: &str, role: &str) -> (User, String) {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        name: "Test Person".to_string(),
        phone: "9876543210".to_string(),
        address: "12 Gasworks Road".to_string(),
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("seed user should insert");
    let token = generate_access_token(user.id, &test_config().jwt)
        .expect("token generation should succeed");
    (user, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request with optional bearer token and optional JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

/// GET without authentication.
pub async fn get(app: &Router, path: &str) -> Response {
    send(app, Method::GET, path, None, None).await
}

/// GET with a bearer token.
pub async fn get_auth(app: &Router, path: &str, token: &str) -> Response {
    send(app, Method::GET, path, Some(token), None).await
}

/// POST a JSON body, optionally authenticated.
pub async fn post_json(
    app: &Router,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, path, token, Some(body)).await
}

/// PUT a JSON body with a bearer token.
pub async fn put_json(
    app: &Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PUT, path, Some(token), Some(body)).await
}

/// DELETE with a bearer token.
pub async fn delete_auth(app: &Router, path: &str, token: &str) -> Response {
    send(app, Method::DELETE, path, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
