use axum::{Json, extract::State, http::StatusCode};
use schoolpro_core::{ApiResponse, AppError};
use tracing::instrument;

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateUserDto, User};
use super::service::UserService;

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created successfully", body = ApiResponse<User>),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Email already exists")
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto), fields(user.email = %dto.email, user.role = %dto.role))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), AppError> {
    let mut conn = state.db.acquire().await?;
    let user = UserService::create_user(&mut conn, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}
