use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    allocate_subjects, create_teacher, get_allocations, get_allocations_by_school, get_teachers,
    get_teachers_by_school,
};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_teacher).get(get_teachers))
        .route("/school/{school_id}", get(get_teachers_by_school))
        .route("/allocations", post(allocate_subjects).get(get_allocations))
        .route(
            "/allocations/school/{school_id}",
            get(get_allocations_by_school),
        )
}
