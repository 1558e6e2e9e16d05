//! Handlers for the notice board.
//!
//! Reading is open to any authenticated user; publishing and deletion are
//! admin-only. Any admin may delete any notice.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use gasbook_core::error::CoreError;
use gasbook_core::types::DbId;
use gasbook_db::models::notice::{CreateNotice, Notice};
use gasbook_db::repositories::NoticeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /admin/notices`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNoticeRequest {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "Content must be at least 10 characters"))]
    pub body: String,
}

/// GET /api/v1/notices
///
/// List all notices, newest first.
pub async fn list_notices(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> AppResult<Json<Vec<Notice>>> {
    let notices = NoticeRepo::list(&state.pool).await?;
    Ok(Json(notices))
}

/// POST /api/v1/admin/notices
///
/// Publish a notice to all users. Returns 201 Created.
pub async fn create_notice(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateNoticeRequest>,
) -> AppResult<(StatusCode, Json<Notice>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let create_dto = CreateNotice {
        title: input.title,
        body: input.body,
    };
    let notice = NoticeRepo::create(&state.pool, &create_dto).await?;
    tracing::info!(notice_id = notice.id, admin_id = admin.id, "Notice published");

    Ok((StatusCode::CREATED, Json(notice)))
}

/// DELETE /api/v1/admin/notices/{id}
///
/// Remove a notice. Returns 204 No Content.
pub async fn delete_notice(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NoticeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notice",
            id,
        }));
    }
    tracing::info!(notice_id = id, admin_id = admin.id, "Notice deleted");
    Ok(StatusCode::NO_CONTENT)
}
