use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::create_user;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/", post(create_user))
}
