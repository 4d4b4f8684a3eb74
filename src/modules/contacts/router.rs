use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{create_contact, get_contacts};

pub fn init_contacts_router() -> Router<AppState> {
    Router::new().route("/", post(create_contact).get(get_contacts))
}
