//! Handlers for the `/profile` resource (the caller's own account).

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use gasbook_core::error::CoreError;
use gasbook_db::models::user::{UpdateProfile, UserResponse};
use gasbook_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT /profile`.
///
/// Contact fields only. Role and the cylinder counters are not writable
/// here: the former is admin-managed, the latter belong to the ledger.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: Option<String>,
    #[validate(length(min = 5, message = "Address must be at least 5 characters"))]
    pub address: Option<String>,
}

/// GET /api/v1/profile
///
/// Return the caller's own account, including the cylinder counters shown
/// on the dashboard.
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/v1/profile
///
/// Update the caller's contact details. Only provided fields change.
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let update_dto = UpdateProfile {
        name: input.name,
        phone: input.phone,
        address: input.address,
    };
    let user = UserRepo::update_profile(&state.pool, auth_user.user_id, &update_dto)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(UserResponse::from(user)))
}
