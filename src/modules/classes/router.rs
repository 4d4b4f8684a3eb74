use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_class, create_section, get_classes, get_classes_by_school, get_sections,
};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_class).get(get_classes))
        .route("/school/{school_id}", get(get_classes_by_school))
}

pub fn init_sections_router() -> Router<AppState> {
    Router::new().route("/", post(create_section).get(get_sections))
}
