//! Route definitions for the `/payments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payments`. All require authentication.
///
/// ```text
/// GET /  -> list_my_payments
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(payment::list_my_payments))
}
