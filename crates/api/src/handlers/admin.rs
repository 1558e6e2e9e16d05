//! Handlers for the `/admin` resource (user management and booking review).
//!
//! All handlers require the `admin` role via [`RequireAdmin`], which checks
//! the stored user row on every call.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use gasbook_core::types::DbId;
use gasbook_db::models::booking::{Booking, BookingListQuery};
use gasbook_db::models::user::UserResponse;
use gasbook_db::repositories::{BookingRepo, LedgerRepo, UserRepo};
use gasbook_notify::messages;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/users/{id}/cylinders`.
#[derive(Debug, Deserialize)]
pub struct AdjustCylindersRequest {
    /// `+1` to grant a cylinder, `-1` to remove one.
    pub delta: i32,
}

/// Request body for `POST /admin/bookings/{id}/review`.
#[derive(Debug, Deserialize)]
pub struct ReviewBookingRequest {
    /// `"approved"` or `"rejected"`.
    pub decision: String,
}

// ---------------------------------------------------------------------------
// User management
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/users
///
/// List all users with their cylinder counters, newest first.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}

/// POST /api/v1/admin/users/{id}/cylinders
///
/// Adjust a user's annual allocation by one cylinder. Both counters move
/// together, clamped at zero; removal on an empty allocation is a no-op.
/// Sends a best-effort balance e-mail to the user.
pub async fn adjust_cylinders(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<AdjustCylindersRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = LedgerRepo::adjust_allocation(&state.pool, id, input.delta).await?;
    tracing::info!(
        user_id = id,
        delta = input.delta,
        admin_id = admin.id,
        allocated = user.cylinders_allocated,
        remaining = user.cylinders_remaining,
        "Cylinder allocation adjusted"
    );

    let (subject, body) = messages::account_balance(&user.name, user.cylinders_remaining);
    state.notifier.send_fire_and_forget(&user.email, subject, body);

    Ok(Json(UserResponse::from(user)))
}

// ---------------------------------------------------------------------------
// Booking review
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/bookings
///
/// List all bookings, optionally filtered by status, newest first.
pub async fn list_bookings(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<BookingListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = BookingRepo::list_all(&state.pool, &params).await?;
    Ok(Json(bookings))
}

/// POST /api/v1/admin/bookings/{id}/review
///
/// Approve or reject a pending booking. A rejection refunds the consumed
/// cylinder in the same transaction. Sends a best-effort status e-mail.
pub async fn review_booking(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ReviewBookingRequest>,
) -> AppResult<Json<Booking>> {
    let booking = LedgerRepo::review_booking(&state.pool, id, &input.decision).await?;
    tracing::info!(
        booking_id = id,
        decision = %input.decision,
        admin_id = admin.id,
        "Booking reviewed"
    );

    notify_status_change(&state, &booking).await?;
    Ok(Json(booking))
}

/// POST /api/v1/admin/bookings/{id}/deliver
///
/// Mark an approved booking as delivered. No allocation effect. Sends a
/// best-effort status e-mail.
pub async fn deliver_booking(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = LedgerRepo::deliver_booking(&state.pool, id).await?;
    tracing::info!(booking_id = id, admin_id = admin.id, "Booking delivered");

    notify_status_change(&state, &booking).await?;
    Ok(Json(booking))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Queue a status-update e-mail to the booking's owner.
async fn notify_status_change(state: &AppState, booking: &Booking) -> AppResult<()> {
    if let Some(owner) = UserRepo::find_by_id(&state.pool, booking.user_id).await? {
        let (subject, body) =
            messages::booking_status_update(&owner.name, booking.id, &booking.status);
        state
            .notifier
            .send_fire_and_forget(&owner.email, subject, body);
    }
    Ok(())
}
