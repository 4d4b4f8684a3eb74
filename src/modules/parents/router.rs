use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_parent, get_parents, get_parents_by_school};

pub fn init_parents_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_parent).get(get_parents))
        .route("/school/{school_id}", get(get_parents_by_school))
}
