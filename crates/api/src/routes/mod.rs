//! Route tree assembly.

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod health;
pub mod notices;
pub mod payments;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /profile                             get, update own account
///
/// /bookings                            create booking, list own bookings
/// /payments                            list own payments
/// /notices                             list notices
///
/// /admin/users                         list users (admin only)
/// /admin/users/{id}/cylinders          adjust allocation (POST)
/// /admin/bookings                      list all bookings
/// /admin/bookings/{id}/review          approve / reject (POST)
/// /admin/bookings/{id}/deliver         mark delivered (POST)
/// /admin/notices                       publish notice (POST)
/// /admin/notices/{id}                  delete notice (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/bookings", bookings::router())
        .nest("/payments", payments::router())
        .nest("/notices", notices::router())
        .nest("/admin", admin::router())
}
