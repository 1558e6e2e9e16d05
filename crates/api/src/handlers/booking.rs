//! Handlers for the `/bookings` resource (customer side).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use gasbook_core::error::CoreError;
use gasbook_db::models::booking::{Booking, CreateBooking};
use gasbook_db::repositories::{BookingRepo, LedgerRepo, UserRepo};
use gasbook_notify::messages;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /bookings`.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub payment_method: String,
    #[serde(default)]
    pub notes: String,
    /// Optional idempotency token; a retried request carrying the same
    /// token returns the original booking instead of a duplicate.
    pub client_token: Option<String>,
}

/// POST /api/v1/bookings
///
/// Book one cylinder. Consumes a unit of the caller's remaining allocation
/// atomically with the booking insert; fails with 409 when the balance is
/// zero. Sends a best-effort confirmation e-mail.
pub async fn create_booking(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let create_dto = CreateBooking {
        payment_method: input.payment_method,
        notes: input.notes,
        client_token: input.client_token,
    };

    let booking = LedgerRepo::create_booking(&state.pool, auth_user.user_id, &create_dto).await?;
    tracing::info!(
        booking_id = booking.id,
        user_id = auth_user.user_id,
        "Cylinder booking created"
    );

    // Confirmation is best-effort: the booking stands even if this fails.
    if let Some(user) = UserRepo::find_by_id(&state.pool, auth_user.user_id).await? {
        let (subject, body) = messages::booking_confirmation(&user.name, booking.id);
        state.notifier.send_fire_and_forget(&user.email, subject, body);
    }

    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/v1/bookings
///
/// List the caller's own bookings, newest first.
pub async fn list_my_bookings(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Booking>>> {
    // Reject tokens whose profile has disappeared rather than answering
    // with an empty history.
    UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let bookings = BookingRepo::list_by_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(bookings))
}
