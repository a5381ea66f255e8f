//! Shared-secret authentication extractor for admin endpoints.
//!
//! There are no user accounts: the admin panel holds a single shared
//! secret, obtained from `POST /auth/login` and presented back in the
//! `Authorization` header on every mutating request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the admin secret.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(_auth: AdminAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        // Clients may send the secret bare or as a Bearer token.
        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        if token != state.config.admin_password {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid credentials".into(),
            )));
        }

        Ok(AdminAuth)
    }
}
