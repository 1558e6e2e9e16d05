//! User entity model and DTOs.

use gasbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub role: String,
    pub cylinders_allocated: i32,
    pub cylinders_remaining: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub role: String,
    pub cylinders_allocated: i32,
    pub cylinders_remaining: i32,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            address: user.address,
            role: user.role,
            cylinders_allocated: user.cylinders_allocated,
            cylinders_remaining: user.cylinders_remaining,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub role: String,
}

/// DTO for updating a user's own contact fields. All fields are optional.
///
/// Deliberately excludes role and the cylinder counters: the former is
/// admin-managed, the latter belong to the allocation ledger.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
