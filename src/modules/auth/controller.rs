use axum::{Json, extract::State};
use schoolpro_core::{ApiResponse, AppError};
use tracing::instrument;

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse};
use super::service::AuthService;

/// Login and receive an access and a refresh token
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Bad request - validation error"),
        (status = 401, description = "Wrong password"),
        (status = 409, description = "Unknown email")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto), fields(user.email = %dto.email))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let response = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(ApiResponse::success(response)))
}
