//! Route definitions for the `/notices` resource (read side).

use axum::routing::get;
use axum::Router;

use crate::handlers::notice;
use crate::state::AppState;

/// Routes mounted at `/notices`. All require authentication; publishing
/// and deletion live under `/admin/notices`.
///
/// ```text
/// GET /  -> list_notices
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(notice::list_notices))
}
