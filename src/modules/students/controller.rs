use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use schoolpro_core::AppError;
use schoolpro_models::ids::SchoolId;
use tracing::instrument;

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateStudentDto, Student};
use super::service::StudentService;

/// Create a student together with their user account
#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created successfully", body = Student),
        (status = 400, description = "Invalid payload, bad date or account creation failed"),
        (status = 409, description = "Email, birth certificate or roll number already used")
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto), fields(student.email = %dto.email, school.id = %dto.school_id))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentService::create_student(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/v1/students",
    responses(
        (status = 200, description = "All students, newest first", body = Vec<Student>)
    ),
    tag = "Students"
)]
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_students(&state.db, None).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/school/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Students of the school, newest first", body = Vec<Student>)
    ),
    tag = "Students"
)]
pub async fn get_students_by_school(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_students(&state.db, Some(school_id)).await?;
    Ok(Json(students))
}

/// Suggest the next registration sequence number for a school
#[utoipa::path(
    get,
    path = "/api/v1/students/seq/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Next sequence number", body = i64)
    ),
    tag = "Students"
)]
pub async fn get_next_sequence(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<i64>, AppError> {
    let next = StudentService::next_sequence(&state.db, school_id).await?;
    Ok(Json(next))
}
