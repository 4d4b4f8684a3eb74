use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_subject, get_brief_subjects, get_subjects, get_subjects_by_school,
};

pub fn init_subjects_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_subject).get(get_subjects))
        .route("/school/{school_id}", get(get_subjects_by_school))
        .route("/brief/{school_id}", get(get_brief_subjects))
}
