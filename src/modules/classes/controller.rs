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
    Class, ClassWithSections, CreateClassDto, CreateSectionDto, Section,
};
use super::service::ClassService;

#[utoipa::path(
    post,
    path = "/api/v1/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created successfully", body = ApiResponse<Class>),
        (status = 400, description = "Title missing"),
        (status = 409, description = "Class already exists")
    ),
    tag = "Classes"
)]
#[instrument(skip(state, dto), fields(class.title = %dto.title))]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<ApiResponse<Class>>), AppError> {
    let class = ClassService::create_class(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(class))))
}

/// List classes with their sections and student counts
#[utoipa::path(
    get,
    path = "/api/v1/classes",
    responses(
        (status = 200, description = "Classes ordered by title", body = Vec<ClassWithSections>)
    ),
    tag = "Classes"
)]
pub async fn get_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassWithSections>>, AppError> {
    let classes = ClassService::get_classes(&state.db, None).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/v1/classes/school/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Classes of the school ordered by title", body = Vec<ClassWithSections>)
    ),
    tag = "Classes"
)]
pub async fn get_classes_by_school(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<Vec<ClassWithSections>>, AppError> {
    let classes = ClassService::get_classes(&state.db, Some(school_id)).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    post,
    path = "/api/v1/sections",
    request_body = CreateSectionDto,
    responses(
        (status = 201, description = "Section created successfully", body = ApiResponse<Section>),
        (status = 400, description = "Title missing"),
        (status = 409, description = "Section already exists")
    ),
    tag = "Classes"
)]
#[instrument(skip(state, dto), fields(section.title = %dto.title, class.id = %dto.class_id))]
pub async fn create_section(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSectionDto>,
) -> Result<(StatusCode, Json<ApiResponse<Section>>), AppError> {
    let section = ClassService::create_section(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(section))))
}

#[utoipa::path(
    get,
    path = "/api/v1/sections",
    responses(
        (status = 200, description = "Sections ordered by title", body = Vec<Section>)
    ),
    tag = "Classes"
)]
pub async fn get_sections(State(state): State<AppState>) -> Result<Json<Vec<Section>>, AppError> {
    let sections = ClassService::get_sections(&state.db).await?;
    Ok(Json(sections))
}
