use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_school_analytics;

pub fn init_analytics_router() -> Router<AppState> {
    Router::new().route("/school/{school_id}", get(get_school_analytics))
}
