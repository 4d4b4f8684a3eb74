mod common;

use axum::http::StatusCode;
use common::{
    count_rows, create_test_school, get_json, post_json, setup_test_app, student_payload,
    unique_suffix,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_creates_user_and_profile(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let school_id = create_test_school(&app).await;
    let suffix = unique_suffix();

    let (status, body) = post_json(
        &app,
        "/api/v1/students",
        student_payload(&school_id, &suffix, "HTS/STD/2024/0001"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    // Student creation answers with the bare record.
    assert_eq!(body["regNo"], "HTS/STD/2024/0001");
    assert!(body.get("password").is_none());

    let role = sqlx::query_scalar::<_, String>(
        "SELECT role::TEXT FROM users WHERE id = (SELECT user_id FROM students WHERE email = $1)",
    )
    .bind(format!("ada-{suffix}@test.com"))
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(role, "STUDENT");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_conflicts_create_nothing(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let school_id = create_test_school(&app).await;
    let first = unique_suffix();
    post_json(
        &app,
        "/api/v1/students",
        student_payload(&school_id, &first, "HTS/STD/2024/0001"),
    )
    .await;

    let cases = [
        ("email", "student with this email already exists"),
        ("birthCertificateNo", "student with this birth certificate number already exists"),
        ("rollNo", "student with this roll number already exists"),
    ];

    for (field, message) in cases {
        let mut payload = student_payload(&school_id, &unique_suffix(), "HTS/STD/2024/0002");
        let original = student_payload(&school_id, &first, "HTS/STD/2024/0001");
        payload[field] = original[field].clone();

        let (status, body) = post_json(&app, "/api/v1/students", payload).await;
        assert_eq!(status, StatusCode::CONFLICT, "field {field}");
        assert_eq!(body["error"], message);
    }

    assert_eq!(count_rows(&pool, "students").await, 1);
    assert_eq!(count_rows(&pool, "users").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_with_taken_user_email_is_bad_request(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let school_id = create_test_school(&app).await;
    let suffix = unique_suffix();

    post_json(
        &app,
        "/api/v1/users",
        json!({
            "email": format!("ada-{suffix}@test.com"),
            "password": "secret123",
            "role": "ADMIN",
            "name": "Existing"
        }),
    )
    .await;

    let (status, body) = post_json(
        &app,
        "/api/v1/students",
        student_payload(&school_id, &suffix, "HTS/STD/2024/0001"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email Already Exists");
    assert_eq!(count_rows(&pool, "students").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_failed_student_insert_rolls_back_user(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let school_id = create_test_school(&app).await;

    let mut payload = student_payload(&school_id, &unique_suffix(), "HTS/STD/2024/0001");
    payload["classId"] = json!(Uuid::new_v4());

    let (status, body) = post_json(&app, "/api/v1/students", payload).await;

    assert!(status.is_server_error());
    assert_eq!(body["error"], "An unexpected error occurred");
    assert_eq!(count_rows(&pool, "students").await, 0);
    assert_eq!(count_rows(&pool, "users").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_with_bad_date_is_bad_request(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let school_id = create_test_school(&app).await;

    let mut payload = student_payload(&school_id, &unique_suffix(), "HTS/STD/2024/0001");
    payload["dob"] = json!("not a date");

    let (status, _) = post_json(&app, "/api/v1/students", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(count_rows(&pool, "users").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_next_sequence(pool: PgPool) {
    let app = setup_test_app(pool);
    let school_id = create_test_school(&app).await;
    let uri = format!("/api/v1/students/seq/{school_id}");

    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(1));

    post_json(
        &app,
        "/api/v1/students",
        student_payload(&school_id, &unique_suffix(), "HTS/STD/2024/7"),
    )
    .await;

    let (_, body) = get_json(&app, &uri).await;
    assert_eq!(body, json!(8));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_students_by_school_newest_first(pool: PgPool) {
    let app = setup_test_app(pool);
    let school_id = create_test_school(&app).await;
    let other_school = create_test_school(&app).await;

    for reg_no in ["A/B/C/1", "A/B/C/2"] {
        post_json(
            &app,
            "/api/v1/students",
            student_payload(&school_id, &unique_suffix(), reg_no),
        )
        .await;
    }
    post_json(
        &app,
        "/api/v1/students",
        student_payload(&other_school, &unique_suffix(), "X/Y/Z/1"),
    )
    .await;

    let (status, body) = get_json(&app, &format!("/api/v1/students/school/{school_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let reg_nos: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["regNo"].as_str().unwrap())
        .collect();
    assert_eq!(reg_nos, vec!["A/B/C/2", "A/B/C/1"]);

    let (_, all) = get_json(&app, "/api/v1/students").await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}
