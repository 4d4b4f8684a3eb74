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

use super::model::{
    AllocateSubjectsDto, CreateTeacherDto, GroupedAllocations, Teacher, TeacherSubjectAllocation,
    TeacherWithDepartment,
};
use super::service::TeacherService;

/// Create a teacher together with their user account
#[utoipa::path(
    post,
    path = "/api/v1/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created successfully", body = ApiResponse<Teacher>),
        (status = 400, description = "Invalid payload, bad date or account creation failed"),
        (status = 409, description = "Email or NIN already used")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto), fields(teacher.email = %dto.email, school.id = %dto.school_id))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<ApiResponse<Teacher>>), AppError> {
    let teacher = TeacherService::create_teacher(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(teacher))))
}

#[utoipa::path(
    get,
    path = "/api/v1/teachers",
    responses(
        (status = 200, description = "All teachers, newest first", body = Vec<TeacherWithDepartment>)
    ),
    tag = "Teachers"
)]
pub async fn get_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherWithDepartment>>, AppError> {
    let teachers = TeacherService::get_teachers(&state.db, None).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/v1/teachers/school/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Teachers of the school, newest first", body = Vec<TeacherWithDepartment>)
    ),
    tag = "Teachers"
)]
pub async fn get_teachers_by_school(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<Vec<TeacherWithDepartment>>, AppError> {
    let teachers = TeacherService::get_teachers(&state.db, Some(school_id)).await?;
    Ok(Json(teachers))
}

/// Allocate subjects to a teacher for class sections
#[utoipa::path(
    post,
    path = "/api/v1/teachers/allocations",
    request_body = AllocateSubjectsDto,
    responses(
        (status = 200, description = "Allocations created", body = ApiResponse<Vec<TeacherSubjectAllocation>>),
        (status = 404, description = "Teacher or subject not found"),
        (status = 409, description = "Subject already allocated for that class section")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto), fields(teacher.id = %dto.teacher_id, allocations = dto.allocations.len()))]
pub async fn allocate_subjects(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AllocateSubjectsDto>,
) -> Result<Json<ApiResponse<Vec<TeacherSubjectAllocation>>>, AppError> {
    let allocations = TeacherService::allocate_subjects(&state.db, dto).await?;
    Ok(Json(ApiResponse::success(allocations)))
}

#[utoipa::path(
    get,
    path = "/api/v1/teachers/allocations",
    responses(
        (status = 200, description = "Allocations grouped by class section", body = ApiResponse<GroupedAllocations>)
    ),
    tag = "Teachers"
)]
pub async fn get_allocations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<GroupedAllocations>>, AppError> {
    let grouped = TeacherService::get_grouped_allocations(&state.db, None).await?;
    Ok(Json(ApiResponse::success(grouped)))
}

#[utoipa::path(
    get,
    path = "/api/v1/teachers/allocations/school/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Allocations of the school grouped by class section", body = ApiResponse<GroupedAllocations>)
    ),
    tag = "Teachers"
)]
pub async fn get_allocations_by_school(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<ApiResponse<GroupedAllocations>>, AppError> {
    let grouped = TeacherService::get_grouped_allocations(&state.db, Some(school_id)).await?;
    Ok(Json(ApiResponse::success(grouped)))
}
