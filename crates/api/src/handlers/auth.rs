//! Handler for `/auth/login`.

use axum::extract::State;
use axum::Json;
use folio_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Successful login response.
///
/// The token is the shared admin secret echoed back; clients store it
/// and present it in the `Authorization` header on admin requests.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if input.password != state.config.admin_password {
        tracing::warn!("Rejected login attempt with wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    Ok(Json(LoginResponse {
        success: true,
        token: input.password,
    }))
}
