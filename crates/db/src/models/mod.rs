//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) where partial updates exist

pub mod booking;
pub mod notice;
pub mod payment;
pub mod session;
pub mod user;
