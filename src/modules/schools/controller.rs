use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use schoolpro_core::{ApiResponse, AppError};
use schoolpro_models::ids::SchoolId;

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateSchoolDto, School};
use super::service::SchoolService;

#[utoipa::path(
    post,
    path = "/api/v1/schools",
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "School created successfully", body = ApiResponse<School>),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "School already exists")
    ),
    tag = "Schools"
)]
pub async fn create_school(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSchoolDto>,
) -> Result<(StatusCode, Json<ApiResponse<School>>), AppError> {
    let school = SchoolService::create_school(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(school))))
}

#[utoipa::path(
    get,
    path = "/api/v1/schools",
    responses(
        (status = 200, description = "All schools, newest first", body = Vec<School>)
    ),
    tag = "Schools"
)]
pub async fn get_all_schools(State(state): State<AppState>) -> Result<Json<Vec<School>>, AppError> {
    let schools = SchoolService::get_all_schools(&state.db).await?;
    Ok(Json(schools))
}

#[utoipa::path(
    get,
    path = "/api/v1/schools/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "School details", body = School),
        (status = 404, description = "School not found")
    ),
    tag = "Schools"
)]
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<SchoolId>,
) -> Result<Json<School>, AppError> {
    let school = SchoolService::get_school_by_id(&state.db, id).await?;
    Ok(Json(school))
}
