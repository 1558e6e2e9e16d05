//! Allocation counter arithmetic.
//!
//! A user carries two counters: `cylinders_allocated` (the annual grant) and
//! `cylinders_remaining` (the grant not yet consumed by an active booking).
//! Every mutation of that pair goes through the functions here, called by the
//! ledger repository while it holds a row lock on the user, so the arithmetic
//! has a single definition and the invariants have a single enforcement
//! point:
//!
//! - neither counter is ever negative
//! - `remaining` never exceeds `allocated`

/// Consume one cylinder from the remaining balance.
///
/// Returns `None` when the balance is already zero — the caller maps this to
/// an insufficient-allocation failure. Never produces a negative balance.
pub fn debit(remaining: i32) -> Option<i32> {
    if remaining <= 0 {
        None
    } else {
        Some(remaining - 1)
    }
}

/// Return one cylinder to the remaining balance after a rejection.
///
/// Capped at `allocated`: an interleaved administrative removal may have
/// lowered the grant below what a plain `remaining + 1` would produce.
pub fn refund(allocated: i32, remaining: i32) -> i32 {
    (remaining + 1).min(allocated)
}

/// Apply an administrative adjustment of `delta` to both counters.
///
/// Both counters are clamped at a floor of 0, and `remaining` is capped at
/// the adjusted `allocated`. Returns the new `(allocated, remaining)` pair.
pub fn apply_adjustment(allocated: i32, remaining: i32, delta: i32) -> (i32, i32) {
    let new_allocated = (allocated + delta).max(0);
    let new_remaining = (remaining + delta).clamp(0, new_allocated);
    (new_allocated, new_remaining)
}

/// Validate that an adjustment delta is a single-cylinder step.
pub fn validate_delta(delta: i32) -> Result<(), String> {
    if delta == 1 || delta == -1 {
        Ok(())
    } else {
        Err(format!("Invalid adjustment delta {delta}. Must be +1 or -1"))
    }
}
