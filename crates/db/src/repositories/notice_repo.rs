//! Repository for the `notices` table.

use sqlx::PgPool;

use gasbook_core::types::DbId;

use crate::models::notice::{CreateNotice, Notice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, body, created_at";

/// Provides append/list/delete operations for notices. There is no update:
/// a published notice is immutable.
pub struct NoticeRepo;

impl NoticeRepo {
    /// Insert a new notice, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNotice) -> Result<Notice, sqlx::Error> {
        let query = format!(
            "INSERT INTO notices (title, body)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find a notice by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notices WHERE id = $1");
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all notices, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Notice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notices ORDER BY created_at DESC");
        sqlx::query_as::<_, Notice>(&query).fetch_all(pool).await
    }

    /// Delete a notice. Returns `true` if a row was removed. Any admin may
    /// delete any notice; there is no ownership check.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
