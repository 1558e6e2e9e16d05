//! Repository for the `payments` table.

use sqlx::PgPool;

use gasbook_core::types::DbId;

use crate::models::payment::{CreatePayment, Payment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, booking_id, user_id, amount_cents, method, status, created_at";

/// Provides operations for payment records. The portal itself only reads;
/// `create` exists for the settling flow and for tests.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new payment record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (booking_id, user_id, amount_cents, method, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.booking_id)
            .bind(input.user_id)
            .bind(input.amount_cents)
            .bind(&input.method)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a payment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's payments, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
