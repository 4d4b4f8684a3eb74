mod common;

use axum::http::StatusCode;
use common::{get_json, post_json, setup_test_app};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_school_returns_envelope_with_slug(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = post_json(&app, "/api/v1/schools", json!({ "name": "Hill Top Academy" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["error"].is_null());
    assert_eq!(body["data"]["name"], "Hill Top Academy");
    assert_eq!(body["data"]["slug"], "hill-top-academy");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_school_with_duplicate_slug_conflicts(pool: PgPool) {
    let app = setup_test_app(pool);

    post_json(&app, "/api/v1/schools", json!({ "name": "Hill Top" })).await;
    let (status, body) = post_json(&app, "/api/v1/schools", json!({ "name": "hill   top" })).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "School Already Exists");
    assert!(body["data"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_school_by_id(pool: PgPool) {
    let app = setup_test_app(pool);

    let (_, created) = post_json(&app, "/api/v1/schools", json!({ "name": "River Side" })).await;
    let id = created["data"]["id"].as_str().unwrap();

    let (status, body) = get_json(&app, &format!("/api/v1/schools/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);

    let (status, body) = get_json(&app, &format!("/api/v1/schools/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "School not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_schools(pool: PgPool) {
    let app = setup_test_app(pool);

    post_json(&app, "/api/v1/schools", json!({ "name": "North School" })).await;
    post_json(&app, "/api/v1/schools", json!({ "name": "South School" })).await;

    let (status, body) = get_json(&app, "/api/v1/schools").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_body_is_bad_request(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = post_json(&app, "/api/v1/schools", json!({ "name": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
