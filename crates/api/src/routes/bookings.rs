//! Route definitions for the `/bookings` resource (customer side).

use axum::routing::get;
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`. All require authentication.
///
/// ```text
/// POST /  -> create_booking
/// GET  /  -> list_my_bookings
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(booking::list_my_bookings).post(booking::create_booking),
    )
}
