use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use schoolpro_core::{ApiResponse, AppError};
use schoolpro_models::ids::SchoolId;
use tracing::instrument;

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateParentDto, Parent};
use super::service::ParentService;

/// Create a parent together with their user account
#[utoipa::path(
    post,
    path = "/api/v1/parents",
    request_body = CreateParentDto,
    responses(
        (status = 201, description = "Parent created successfully", body = ApiResponse<Parent>),
        (status = 400, description = "Invalid payload or account creation failed"),
        (status = 409, description = "Email or NIN already used")
    ),
    tag = "Parents"
)]
#[instrument(skip(state, dto), fields(parent.email = %dto.email, school.id = %dto.school_id))]
pub async fn create_parent(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateParentDto>,
) -> Result<(StatusCode, Json<ApiResponse<Parent>>), AppError> {
    let parent = ParentService::create_parent(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(parent))))
}

#[utoipa::path(
    get,
    path = "/api/v1/parents",
    responses(
        (status = 200, description = "All parents, newest first", body = Vec<Parent>)
    ),
    tag = "Parents"
)]
pub async fn get_parents(State(state): State<AppState>) -> Result<Json<Vec<Parent>>, AppError> {
    let parents = ParentService::get_parents(&state.db, None).await?;
    Ok(Json(parents))
}

#[utoipa::path(
    get,
    path = "/api/v1/parents/school/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Parents of the school, newest first", body = Vec<Parent>)
    ),
    tag = "Parents"
)]
pub async fn get_parents_by_school(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<Vec<Parent>>, AppError> {
    let parents = ParentService::get_parents(&state.db, Some(school_id)).await?;
    Ok(Json(parents))
}
