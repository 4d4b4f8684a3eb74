use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_department, get_brief_departments, get_departments, get_departments_by_school,
};

pub fn init_departments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_department).get(get_departments))
        .route("/school/{school_id}", get(get_departments_by_school))
        .route("/brief/{school_id}", get(get_brief_departments))
}
