//! Booking status constants and the booking state machine.
//!
//! Defines the valid status values for a cylinder booking and provides the
//! transition validation used by both the DB and API layers. The legal
//! transitions are:
//!
//! ```text
//! pending -> approved -> delivered
//! pending -> rejected
//! ```
//!
//! `delivered` and `rejected` are terminal; an `approved` booking can never
//! return to `pending`.

/// Booking has been submitted and awaits an admin decision.
pub const STATUS_PENDING: &str = "pending";

/// Booking was approved and awaits delivery.
pub const STATUS_APPROVED: &str = "approved";

/// Booking was rejected; the consumed cylinder is refunded.
pub const STATUS_REJECTED: &str = "rejected";

/// Cylinder was delivered. Terminal.
pub const STATUS_DELIVERED: &str = "delivered";

/// All valid booking status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_DELIVERED,
];

/// Decisions an admin may take on a pending booking.
pub const REVIEW_DECISIONS: &[&str] = &[STATUS_APPROVED, STATUS_REJECTED];

/// Cash is collected when the cylinder is handed over.
pub const PAYMENT_CASH_ON_DELIVERY: &str = "cash-on-delivery";

/// Customer pays by scanning the agency's QR code.
pub const PAYMENT_QR: &str = "qr-payment";

/// All valid payment method values.
pub const VALID_PAYMENT_METHODS: &[&str] = &[PAYMENT_CASH_ON_DELIVERY, PAYMENT_QR];

/// Whether a status admits no further transitions.
pub fn is_terminal(status: &str) -> bool {
    status == STATUS_REJECTED || status == STATUS_DELIVERED
}

/// Validate a single status transition against the state machine.
///
/// Returns `Err` with a human-readable explanation for any pair that is not
/// one of the three legal edges.
pub fn validate_transition(from: &str, to: &str) -> Result<(), String> {
    let legal = matches!(
        (from, to),
        (STATUS_PENDING, STATUS_APPROVED)
            | (STATUS_PENDING, STATUS_REJECTED)
            | (STATUS_APPROVED, STATUS_DELIVERED)
    );
    if legal {
        Ok(())
    } else {
        Err(format!("Booking cannot move from '{from}' to '{to}'"))
    }
}

/// Validate that a review decision is one of the accepted values.
pub fn validate_review_decision(decision: &str) -> Result<(), String> {
    if REVIEW_DECISIONS.contains(&decision) {
        Ok(())
    } else {
        Err(format!(
            "Invalid decision '{decision}'. Must be one of: {}",
            REVIEW_DECISIONS.join(", ")
        ))
    }
}

/// Validate that a payment method is one of the accepted values.
pub fn validate_payment_method(method: &str) -> Result<(), String> {
    if VALID_PAYMENT_METHODS.contains(&method) {
        Ok(())
    } else {
        Err(format!(
            "Invalid payment method '{method}'. Must be one of: {}",
            VALID_PAYMENT_METHODS.join(", ")
        ))
    }
}
