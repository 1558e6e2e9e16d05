//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{admin, notice};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler extractors,
/// re-checked against the stored user row on every call).
///
/// ```text
/// GET    /users                     -> list_users
/// POST   /users/{id}/cylinders      -> adjust_cylinders
/// GET    /bookings                  -> list_bookings
/// POST   /bookings/{id}/review      -> review_booking
/// POST   /bookings/{id}/deliver     -> deliver_booking
/// POST   /notices                   -> create_notice
/// DELETE /notices/{id}              -> delete_notice
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}/cylinders", post(admin::adjust_cylinders))
        .route("/bookings", get(admin::list_bookings))
        .route("/bookings/{id}/review", post(admin::review_booking))
        .route("/bookings/{id}/deliver", post(admin::deliver_booking))
        .route("/notices", post(notice::create_notice))
        .route("/notices/{id}", delete(notice::delete_notice))
}
