use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::analytics::init_analytics_router;
use crate::modules::auth::init_auth_router;
use crate::modules::classes::{init_classes_router, init_sections_router};
use crate::modules::contacts::init_contacts_router;
use crate::modules::departments::init_departments_router;
use crate::modules::parents::init_parents_router;
use crate::modules::schools::init_schools_router;
use crate::modules::students::init_students_router;
use crate::modules::subjects::init_subjects_router;
use crate::modules::teachers::init_teachers_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

fn api_v1_router() -> Router<AppState> {
    Router::new()
        .nest("/users", init_users_router())
        .merge(init_auth_router())
        .nest("/schools", init_schools_router())
        .nest("/students", init_students_router())
        .nest("/teachers", init_teachers_router())
        .nest("/parents", init_parents_router())
        .nest("/classes", init_classes_router())
        .nest("/sections", init_sections_router())
        .nest("/departments", init_departments_router())
        .nest("/subjects", init_subjects_router())
        .nest("/analytics", init_analytics_router())
        .nest("/contacts", init_contacts_router())
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api/v1", api_v1_router())
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
}
