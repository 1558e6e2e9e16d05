//! Payment entity model and DTOs.

use gasbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub booking_id: DbId,
    pub user_id: DbId,
    pub amount_cents: i64,
    pub method: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for recording a payment. Written by the settling flow, not by any
/// portal endpoint.
#[derive(Debug, Deserialize)]
pub struct CreatePayment {
    pub booking_id: DbId,
    pub user_id: DbId,
    pub amount_cents: i64,
    pub method: String,
    pub status: String,
}
