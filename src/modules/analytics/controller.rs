use axum::{
    Json,
    extract::{Path, State},
};
use schoolpro_core::AppError;
use schoolpro_models::analytics::AnalyticsItem;
use schoolpro_models::ids::SchoolId;

use crate::state::AppState;

use super::service::AnalyticsService;

/// Headline counts for a school dashboard
#[utoipa::path(
    get,
    path = "/api/v1/analytics/school/{school_id}",
    params(
        ("school_id" = uuid::Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Students, teachers, parents and classes counts", body = Vec<AnalyticsItem>)
    ),
    tag = "Analytics"
)]
pub async fn get_school_analytics(
    State(state): State<AppState>,
    Path(school_id): Path<SchoolId>,
) -> Result<Json<Vec<AnalyticsItem>>, AppError> {
    let counts = AnalyticsService::school_counts(&state.db, school_id).await?;
    Ok(Json(counts.into_items()))
}
