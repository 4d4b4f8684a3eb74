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

use super::model::{BriefItem, CreateDepartmentDto, Department, DepartmentWithRelations};
use super::service::DepartmentService;

#[utoipa::path(
    post,
    path = "/api/v1/departments",
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Department created successfully", body = ApiResponse<Department>),
        (status = 409, description = "Department already exists")
    ),
    tag = "Departments"
)]
#[instrument(skip(state, dto), fields(department.name = %dto.name))]
pub async fn create_department(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateDepartmentDto>,
) -> Result<(StatusCode, Json<ApiResponse<Department>>), AppError> {
    let department = DepartmentService::create_department(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(department))))
}

#[utoipa::path(
    get,
    path = "/api/v1/departments",
    responses(
        (status = 200, description = "Departments with their teachers and subjects", body = Vec<DepartmentWithRelations>)
    ),
    tag = "Departments"
)]
pub async fn get_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentWithRelations>>, AppError> {
    let departments = DepartmentService::get_departments(&state.db, None).await?;
    Ok(Json(departments))
}

#[utoipa::path(
    get,
    path = "/api/v1/departments/school/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Departments of the school with their teachers and subjects", body = Vec<DepartmentWithRelations>)
    ),
    tag = "Departments"
)]
pub async fn get_departments_by_school(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<Vec<DepartmentWithRelations>>, AppError> {
    let departments = DepartmentService::get_departments(&state.db, Some(school_id)).await?;
    Ok(Json(departments))
}

/// `{id, name}` pairs for department pickers
#[utoipa::path(
    get,
    path = "/api/v1/departments/brief/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Departments of the school, newest first", body = Vec<BriefItem>)
    ),
    tag = "Departments"
)]
pub async fn get_brief_departments(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<Vec<BriefItem>>, AppError> {
    let departments = DepartmentService::get_brief_departments(&state.db, school_id).await?;
    Ok(Json(departments))
}
