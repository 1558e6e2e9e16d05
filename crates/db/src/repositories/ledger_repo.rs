//! The allocation ledger: the only writer of the per-user cylinder
//! counters and of booking status.
//!
//! Every operation runs inside a transaction and takes `SELECT ... FOR
//! UPDATE` row locks on the rows it mutates, so two concurrent creates for
//! the same user (or a create racing a rejection) serialize at the database
//! and can never double-spend the last cylinder or double-refund. The
//! counter arithmetic itself lives in `gasbook_core::allocation`; this
//! module only decides what to lock and when to commit.
//!
//! Operations that fail with a retryable transaction error (serialization
//! failure, deadlock) are retried a bounded number of times before
//! surfacing `CoreError::RetryExhausted`.

use sqlx::PgPool;

use gasbook_core::allocation;
use gasbook_core::booking::{self, STATUS_DELIVERED, STATUS_PENDING, STATUS_REJECTED};
use gasbook_core::error::CoreError;
use gasbook_core::types::DbId;

use crate::error::LedgerError;
use crate::models::booking::{Booking, CreateBooking};
use crate::models::user::User;
use crate::repositories::{booking_repo, user_repo};

/// Attempts per operation before giving up on transaction conflicts.
const MAX_CONFLICT_RETRIES: u32 = 3;

/// Owns every mutation of `cylinders_allocated` / `cylinders_remaining`
/// and of `bookings.status`.
pub struct LedgerRepo;

impl LedgerRepo {
    /// Create a booking, consuming one cylinder from the user's remaining
    /// balance in the same transaction.
    ///
    /// Fails with [`CoreError::NotFound`] if the user does not exist and
    /// [`CoreError::InsufficientAllocation`] if the balance is zero. When
    /// `input.client_token` matches an existing booking, that booking is
    /// returned and the balance is left untouched, making whole-operation
    /// retries safe.
    pub async fn create_booking(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateBooking,
    ) -> Result<Booking, LedgerError> {
        booking::validate_payment_method(&input.payment_method)
            .map_err(CoreError::Validation)?;

        Self::with_conflict_retry("create_booking", || {
            Self::create_booking_once(pool, user_id, input)
        })
        .await
    }

    async fn create_booking_once(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateBooking,
    ) -> Result<Booking, LedgerError> {
        let mut tx = pool.begin().await?;

        let user = Self::lock_user(&mut tx, user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })?;

        let new_remaining = allocation::debit(user.cylinders_remaining)
            .ok_or(CoreError::InsufficientAllocation { user_id })?;

        sqlx::query("UPDATE users SET cylinders_remaining = $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(new_remaining)
            .execute(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO bookings \
                 (user_id, user_name, user_address, user_phone, \
                  payment_method, notes, status, client_token) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (client_token) WHERE client_token IS NOT NULL DO NOTHING \
             RETURNING {}",
            booking_repo::COLUMNS
        );
        let inserted = sqlx::query_as::<_, Booking>(&insert)
            .bind(user_id)
            .bind(&user.name)
            .bind(&user.address)
            .bind(&user.phone)
            .bind(&input.payment_method)
            .bind(&input.notes)
            .bind(STATUS_PENDING)
            .bind(&input.client_token)
            .fetch_optional(&mut *tx)
            .await?;

        match inserted {
            Some(created) => {
                tx.commit().await?;
                Ok(created)
            }
            None => {
                // Duplicate client token: the original create already went
                // through. Roll back (undoing the debit) and hand back the
                // existing booking.
                tx.rollback().await?;
                let token = input.client_token.as_deref().unwrap_or_default();
                let query = format!(
                    "SELECT {} FROM bookings WHERE client_token = $1 AND user_id = $2",
                    booking_repo::COLUMNS
                );
                let existing = sqlx::query_as::<_, Booking>(&query)
                    .bind(token)
                    .bind(user_id)
                    .fetch_optional(pool)
                    .await?
                    .ok_or_else(|| {
                        CoreError::Conflict(
                            "Client token already used by another booking".to_string(),
                        )
                    })?;
                Ok(existing)
            }
        }
    }

    /// Apply an admin review decision (`approved` or `rejected`) to a
    /// pending booking.
    ///
    /// A rejection refunds exactly one cylinder to the owning user in the
    /// same transaction. Fails with [`CoreError::InvalidTransition`] for
    /// any booking that is no longer pending, so a repeated rejection can
    /// never double-refund.
    pub async fn review_booking(
        pool: &PgPool,
        booking_id: DbId,
        decision: &str,
    ) -> Result<Booking, LedgerError> {
        booking::validate_review_decision(decision).map_err(CoreError::Validation)?;

        Self::with_conflict_retry("review_booking", || {
            Self::transition_once(pool, booking_id, decision)
        })
        .await
    }

    /// Mark an approved booking as delivered. No allocation effect: the
    /// cylinder was consumed at creation.
    pub async fn deliver_booking(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Booking, LedgerError> {
        Self::with_conflict_retry("deliver_booking", || {
            Self::transition_once(pool, booking_id, STATUS_DELIVERED)
        })
        .await
    }

    async fn transition_once(
        pool: &PgPool,
        booking_id: DbId,
        new_status: &str,
    ) -> Result<Booking, LedgerError> {
        let mut tx = pool.begin().await?;

        let lock = format!(
            "SELECT {} FROM bookings WHERE id = $1 FOR UPDATE",
            booking_repo::COLUMNS
        );
        let current = sqlx::query_as::<_, Booking>(&lock)
            .bind(booking_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id: booking_id,
            })?;

        booking::validate_transition(&current.status, new_status).map_err(|_| {
            CoreError::InvalidTransition {
                from: current.status.clone(),
                to: new_status.to_string(),
            }
        })?;

        let update = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            booking_repo::COLUMNS
        );
        let updated = sqlx::query_as::<_, Booking>(&update)
            .bind(booking_id)
            .bind(new_status)
            .fetch_one(&mut *tx)
            .await?;

        if new_status == STATUS_REJECTED {
            let user = Self::lock_user(&mut tx, current.user_id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "User",
                    id: current.user_id,
                })?;
            let refunded = allocation::refund(user.cylinders_allocated, user.cylinders_remaining);
            sqlx::query(
                "UPDATE users SET cylinders_remaining = $2, updated_at = NOW() WHERE id = $1",
            )
            .bind(current.user_id)
            .bind(refunded)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Administrative adjustment of a user's allocation by `delta` (+1/-1).
    ///
    /// Both counters move together, clamped at a floor of 0; removal on an
    /// empty allocation is a no-op, not an error. Returns the updated user.
    pub async fn adjust_allocation(
        pool: &PgPool,
        user_id: DbId,
        delta: i32,
    ) -> Result<User, LedgerError> {
        allocation::validate_delta(delta).map_err(CoreError::Validation)?;

        Self::with_conflict_retry("adjust_allocation", || {
            Self::adjust_allocation_once(pool, user_id, delta)
        })
        .await
    }

    async fn adjust_allocation_once(
        pool: &PgPool,
        user_id: DbId,
        delta: i32,
    ) -> Result<User, LedgerError> {
        let mut tx = pool.begin().await?;

        let user = Self::lock_user(&mut tx, user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })?;

        let (allocated, remaining) = allocation::apply_adjustment(
            user.cylinders_allocated,
            user.cylinders_remaining,
            delta,
        );

        let update = format!(
            "UPDATE users SET \
                 cylinders_allocated = $2, \
                 cylinders_remaining = $3, \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            user_repo::COLUMNS
        );
        let updated = sqlx::query_as::<_, User>(&update)
            .bind(user_id)
            .bind(allocated)
            .bind(remaining)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Lock a user row for the remainder of the transaction.
    async fn lock_user(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM users WHERE id = $1 FOR UPDATE",
            user_repo::COLUMNS
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Run `op` until it succeeds, fails on a non-retryable error, or
    /// exhausts [`MAX_CONFLICT_RETRIES`] retryable transaction failures.
    async fn with_conflict_retry<T, F, Fut>(name: &str, mut op: F) -> Result<T, LedgerError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, LedgerError>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Err(LedgerError::Database(err)) if is_retryable(&err) => {
                    attempt += 1;
                    if attempt > MAX_CONFLICT_RETRIES {
                        return Err(CoreError::RetryExhausted(format!(
                            "{name} could not be committed after {MAX_CONFLICT_RETRIES} attempts"
                        ))
                        .into());
                    }
                    tracing::warn!(
                        operation = name,
                        attempt,
                        error = %err,
                        "Retrying ledger operation after transaction conflict"
                    );
                }
                other => return other,
            }
        }
    }
}

/// Whether a database error is a transient transaction conflict worth
/// retrying: serialization failure (40001) or deadlock detected (40P01).
fn is_retryable(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            matches!(db_err.code().as_deref(), Some("40001") | Some("40P01"))
        }
        _ => false,
    }
}
