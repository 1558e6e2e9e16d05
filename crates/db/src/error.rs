//! Error type for ledger operations.
//!
//! Ledger methods can fail on a domain precondition (no cylinders left,
//! illegal transition) or on the database itself; [`LedgerError`] carries
//! both so callers keep the distinction.

use gasbook_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A domain precondition failed. Terminal for the triggering call.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// The database rejected the operation or was unreachable.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
