//! Booking entity model and DTOs.

use gasbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bookings` table.
///
/// The `user_*` fields are a snapshot of the customer's contact details at
/// creation time, preserved even if the profile changes later.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub user_address: String,
    pub user_phone: String,
    pub payment_method: String,
    pub notes: String,
    pub status: String,
    pub client_token: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new booking.
#[derive(Debug, Deserialize)]
pub struct CreateBooking {
    pub payment_method: String,
    pub notes: String,
    /// Optional idempotency token. A retried create carrying the same token
    /// returns the already-created booking instead of a duplicate.
    pub client_token: Option<String>,
}

/// Query parameters for listing bookings (admin view).
#[derive(Debug, Default, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
