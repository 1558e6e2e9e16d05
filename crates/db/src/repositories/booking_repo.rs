//! Read-side repository for the `bookings` table.
//!
//! All writes to bookings (creation and status changes) go through
//! [`crate::repositories::LedgerRepo`]; this repository only queries.

use sqlx::PgPool;

use gasbook_core::types::DbId;

use crate::models::booking::{Booking, BookingListQuery};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, user_id, user_name, user_address, user_phone, \
                        payment_method, notes, status, client_token, created_at, updated_at";

/// Maximum page size for booking listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for booking listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides read operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Find a booking by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's bookings, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all bookings (admin view) with optional status filter and pagination.
    pub async fn list_all(
        pool: &PgPool,
        params: &BookingListQuery,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);

        let where_clause = if params.status.is_some() {
            "WHERE status = $1"
        } else {
            ""
        };
        let (limit_idx, offset_idx) = if params.status.is_some() {
            (2, 3)
        } else {
            (1, 2)
        };

        let query = format!(
            "SELECT {COLUMNS} FROM bookings \
             {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${limit_idx} OFFSET ${offset_idx}"
        );

        let mut q = sqlx::query_as::<_, Booking>(&query);
        if let Some(status) = &params.status {
            q = q.bind(status);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Count a user's bookings that hold a cylinder (everything but rejected).
    pub async fn count_active_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM bookings WHERE user_id = $1 AND status <> 'rejected'",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
