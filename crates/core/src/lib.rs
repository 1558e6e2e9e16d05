//! Domain core for the gas-cylinder booking portal.
//!
//! Pure types and logic only — no I/O, no database access. The booking
//! state machine and the allocation counter arithmetic live here so the
//! persistence and API layers share a single definition of both.

pub mod allocation;
pub mod booking;
pub mod error;
pub mod payment;
pub mod roles;
pub mod types;
