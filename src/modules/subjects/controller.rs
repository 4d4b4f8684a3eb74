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

use super::model::{BriefItem, CreateSubjectDto, Subject};
use super::service::SubjectService;

#[utoipa::path(
    post,
    path = "/api/v1/subjects",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created successfully", body = ApiResponse<Subject>),
        (status = 409, description = "Subject already exists")
    ),
    tag = "Subjects"
)]
#[instrument(skip(state, dto), fields(subject.name = %dto.name))]
pub async fn create_subject(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
) -> Result<(StatusCode, Json<ApiResponse<Subject>>), AppError> {
    let subject = SubjectService::create_subject(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(subject))))
}

#[utoipa::path(
    get,
    path = "/api/v1/subjects",
    responses(
        (status = 200, description = "All subjects, oldest first", body = Vec<Subject>)
    ),
    tag = "Subjects"
)]
pub async fn get_subjects(State(state): State<AppState>) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::get_subjects(&state.db, None).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/v1/subjects/school/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Subjects of the school, oldest first", body = Vec<Subject>)
    ),
    tag = "Subjects"
)]
pub async fn get_subjects_by_school(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::get_subjects(&state.db, Some(school_id)).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/v1/subjects/brief/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Subjects of the school, newest first", body = Vec<BriefItem>)
    ),
    tag = "Subjects"
)]
pub async fn get_brief_subjects(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<Vec<BriefItem>>, AppError> {
    let subjects = SubjectService::get_brief_subjects(&state.db, school_id).await?;
    Ok(Json(subjects))
}
