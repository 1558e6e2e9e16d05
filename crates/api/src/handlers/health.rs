//! Health check handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Liveness probe. Reports whether the database answers a trivial query.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = gasbook_db::health_check(&state.pool).await.is_ok();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}
