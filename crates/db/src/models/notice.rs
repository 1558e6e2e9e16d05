//! Notice entity model and DTOs.

use gasbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notice {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
}

/// DTO for publishing a notice.
#[derive(Debug, Deserialize)]
pub struct CreateNotice {
    pub title: String,
    pub body: String,
}
