#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use schoolpro::router::init_router;
use schoolpro::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub fn setup_test_app(pool: PgPool) -> Router {
    dotenvy::dotenv().ok();
    init_router(AppState::with_pool(pool))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    let request = match body {
        Some(body) => builder
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_school(app: &Router) -> String {
    let name = format!("Test School {}", unique_suffix());
    let (status, body) = post_json(app, "/api/v1/schools", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

pub async fn create_test_class(app: &Router, school_id: &str, title: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/v1/classes",
        json!({ "title": title, "schoolId": school_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

pub async fn create_test_section(
    app: &Router,
    school_id: &str,
    class_id: &str,
    title: &str,
) -> String {
    let (status, body) = post_json(
        app,
        "/api/v1/sections",
        json!({ "title": title, "classId": class_id, "schoolId": school_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

pub fn student_payload(school_id: &str, suffix: &str, reg_no: &str) -> Value {
    json!({
        "name": "Ada",
        "surname": "Obi",
        "email": format!("ada-{suffix}@test.com"),
        "gender": "Female",
        "dob": "2010-04-12",
        "regNo": reg_no,
        "password": "secret123",
        "birthCertificateNo": format!("BC-{suffix}"),
        "rollNo": format!("R-{suffix}"),
        "admissionDate": "2024-09-01",
        "schoolId": school_id,
        "schoolName": "Test School"
    })
}

pub fn teacher_payload(school_id: &str, suffix: &str) -> Value {
    json!({
        "firstName": "Kemi",
        "lastName": "Bello",
        "email": format!("kemi-{suffix}@test.com"),
        "gender": "Female",
        "yearsOfExperience": "4",
        "NIN": format!("NIN-{suffix}"),
        "password": "secret123",
        "schoolId": school_id
    })
}

pub async fn create_test_user(app: &Router, email: &str) {
    let (status, _) = post_json(
        app,
        "/api/v1/users",
        json!({ "email": email, "password": "secret123", "role": "ADMIN", "name": "Existing" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}
