use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_student, get_next_sequence, get_students, get_students_by_school};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student).get(get_students))
        .route("/school/{school_id}", get(get_students_by_school))
        .route("/seq/{school_id}", get(get_next_sequence))
}
