mod common;

use axum::http::StatusCode;
use common::{count_rows, generate_unique_email, get_json, post_json, setup_test_app};
use serde_json::{Value, json};
use sqlx::PgPool;

fn contact_payload(email: &str, school_name: &str) -> Value {
    json!({
        "fullName": "Grace Hopper",
        "email": email,
        "phone": "+2348000000000",
        "country": "Nigeria",
        "schoolName": school_name,
        "students": "350",
        "role": "Principal",
        "media": "Twitter",
        "message": "We would like a demo."
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_contact_accepts_string_student_count(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = post_json(
        &app,
        "/api/v1/contacts",
        contact_payload(&generate_unique_email(), "Greenfield"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["students"], 350);
    assert!(body["error"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_contact_email_or_school(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let email = generate_unique_email();
    post_json(&app, "/api/v1/contacts", contact_payload(&email, "Greenfield")).await;

    for payload in [
        contact_payload(&email, "Another School"),
        contact_payload(&generate_unique_email(), "Greenfield"),
    ] {
        let (status, body) = post_json(&app, "/api/v1/contacts", payload).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "A contact with this email or school already exists!");
    }

    assert_eq!(count_rows(&pool, "contacts").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_contacts_newest_first(pool: PgPool) {
    let app = setup_test_app(pool);
    post_json(&app, "/api/v1/contacts", contact_payload(&generate_unique_email(), "First")).await;
    post_json(&app, "/api/v1/contacts", contact_payload(&generate_unique_email(), "Second")).await;

    let (status, body) = get_json(&app, "/api/v1/contacts").await;

    assert_eq!(status, StatusCode::OK);
    let contacts = body["data"].as_array().unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0]["schoolName"], "Second");
}
