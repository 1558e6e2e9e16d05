//! Handlers for the `/payments` resource.
//!
//! Payments are a read-only projection here: rows are written by whichever
//! flow settles payment, and the portal only shows the caller their own
//! history.

use axum::extract::State;
use axum::Json;

use gasbook_db::models::payment::Payment;
use gasbook_db::repositories::PaymentRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/payments
///
/// List the caller's payments, newest first.
pub async fn list_my_payments(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = PaymentRepo::list_by_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(payments))
}
