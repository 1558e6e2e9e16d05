//! Payment status constants.
//!
//! Payments are a read-only projection in this system: rows are written by
//! whichever flow settles payment, and the portal only lists them. The
//! constants here must match the CHECK constraint in
//! `20260715000004_create_payments_table.sql`.

/// Payment has been initiated but not settled.
pub const PAYMENT_STATUS_PENDING: &str = "pending";

/// Payment settled successfully.
pub const PAYMENT_STATUS_COMPLETED: &str = "completed";

/// Payment failed or was abandoned.
pub const PAYMENT_STATUS_FAILED: &str = "failed";

/// All valid payment status values.
pub const VALID_PAYMENT_STATUSES: &[&str] = &[
    PAYMENT_STATUS_PENDING,
    PAYMENT_STATUS_COMPLETED,
    PAYMENT_STATUS_FAILED,
];

/// Validate that a payment status string is one of the accepted values.
pub fn validate_payment_status(status: &str) -> Result<(), String> {
    if VALID_PAYMENT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid payment status '{status}'. Must be one of: {}",
            VALID_PAYMENT_STATUSES.join(", ")
        ))
    }
}
