//! Role-based access control extractors.
//!
//! Roles are authoritative only in the `users` table: [`RequireAdmin`]
//! re-reads the caller's row on every privileged request instead of
//! trusting a role cached in a token or client session. A role change
//! therefore takes effect on the very next request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use gasbook_core::error::CoreError;
use gasbook_core::roles::ROLE_ADMIN;
use gasbook_db::models::user::User;
use gasbook_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role, checked against the stored user row.
/// Rejects with 403 Forbidden otherwise.
///
/// The extractor yields the full admin [`User`] row, so handlers can log
/// the acting admin without a second lookup.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     // admin.role == "admin" is guaranteed here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = AuthUser::from_request_parts(parts, state).await?;

        let user = UserRepo::find_by_id(&state.pool, identity.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
            })?;

        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
