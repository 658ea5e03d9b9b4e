mod common;

use axum::http::StatusCode;
use common::setup;
use serde_json::{Value, json};
use server::reset_tokens::RESET_TOKEN_TTL;

#[tokio::test]
async fn college_crud_round_trip() {
    let (server, _) = setup().await;

    let created = server
        .post("/api/colleges")
        .json(&json!({"college_id": "COE", "college_name": "College of Engineering"}))
        .await;
    created.assert_status(StatusCode::CREATED);

    let fetched = server.get("/api/colleges/COE").await;
    fetched.assert_status_ok();
    let body: Value = fetched.json();
    assert_eq!(body["college_id"], "COE");
    assert_eq!(body["college_name"], "College of Engineering");

    let updated = server
        .put("/api/colleges/COE")
        .json(&json!({"college_name": "Engineering"}))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["college_name"], "Engineering");

    let deleted = server.delete("/api/colleges/COE").await;
    deleted.assert_status(StatusCode::NO_CONTENT);

    let missing = server.get("/api/colleges/COE").await;
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_term_name_is_rejected() {
    let (server, _) = setup().await;

    let response = server.post("/api/terms").json(&json!({"term_name": "  "})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["term_name"][0], "Term name cannot be empty.");

    let response = server.post("/api/terms").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

async fn seed_account(server: &axum_test::TestServer, user_id: i32, email: &str) {
    let response = server
        .post("/api/accounts")
        .json(&json!({
            "user_id": user_id,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email_address": email,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

async fn seed_term(server: &axum_test::TestServer, name: &str) -> i32 {
    let response = server.post("/api/terms").json(&json!({"term_name": name})).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["term_id"].as_i64().unwrap() as i32
}

#[tokio::test]
async fn deleting_a_course_removes_its_assignments() {
    let (server, _) = setup().await;
    let term_id = seed_term(&server, "1st Semester").await;
    seed_account(&server, 10, "ada@example.edu").await;

    let created = server
        .post("/api/courses")
        .json(&json!({
            "course_id": "CS101",
            "course_name": "Intro to Computing",
            "term_id": term_id,
            "user_ids": [10],
            "leaders": [10],
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let body: Value = created.json();
    assert_eq!(body["term_name"], "1st Semester");
    assert_eq!(body["leaders"][0], 10);
    assert_eq!(body["instructor_names"][0], "Ada Lovelace");

    let assignment = server.get("/api/course_users/CS101/10").await;
    assignment.assert_status_ok();

    let deleted = server.delete("/api/courses/CS101").await;
    deleted.assert_status(StatusCode::NO_CONTENT);

    server
        .get("/api/courses/CS101")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/api/course_users/CS101/10")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn course_create_with_unknown_term_is_rejected() {
    let (server, _) = setup().await;

    let response = server
        .post("/api/courses")
        .json(&json!({
            "course_id": "CS101",
            "course_name": "Intro to Computing",
            "term_id": 999,
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Term not found");
}

#[tokio::test]
async fn bulk_update_copies_template_metadata() {
    let (server, _) = setup().await;
    let term_id = seed_term(&server, "1st Semester").await;

    for (id, name) in [
        ("COE", "College of Engineering"),
        ("CAS", "College of Arts and Sciences"),
    ] {
        server
            .post("/api/colleges")
            .json(&json!({"college_id": id, "college_name": name}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    server
        .post("/api/exam_periods")
        .json(&json!({
            "start_date": "2025-10-20T00:00:00Z",
            "end_date": "2025-10-24T00:00:00Z",
            "academic_year": "2025-2026",
            "exam_category": "Midterm",
            "term_id": term_id,
            "college_id": "COE",
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .put("/api/exam_periods/bulk_update")
        .json(&json!({"updates": [
            {"start_date": "2025-10-20", "college_name": "CAS"},
        ]}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["updated_count"], 1);

    let list = server.get("/api/exam_periods").await;
    let periods: Vec<Value> = list.json();
    assert_eq!(periods.len(), 2);
    let copied = periods
        .iter()
        .find(|p| p["college_id"] == "CAS")
        .expect("reconciled period");
    assert_eq!(copied["academic_year"], "2025-2026");
    assert_eq!(copied["exam_category"], "Midterm");
    assert_eq!(copied["term_name"], "1st Semester");

    // no template on this date, so nothing is created
    let response = server
        .put("/api/exam_periods/bulk_update")
        .json(&json!({"updates": [
            {"start_date": "2025-12-01", "college_name": "CAS"},
        ]}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["updated_count"], 0);

    // empty batch is a bad request
    server
        .put("/api/exam_periods/bulk_update")
        .json(&json!({"updates": []}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn availability_filters_by_user_and_accepts_batches() {
    let (server, _) = setup().await;
    seed_account(&server, 10, "ada@example.edu").await;
    seed_account(&server, 11, "grace@example.edu").await;

    let batch = server
        .post("/api/availabilities")
        .json(&json!([
            {"day": "2025-10-20", "time_slot": "AM", "status": "available", "user_id": 10},
            {"day": "2025-10-21", "time_slot": "PM", "status": "unavailable", "user_id": 10},
        ]))
        .await;
    batch.assert_status(StatusCode::CREATED);
    assert_eq!(batch.json::<Vec<Value>>().len(), 2);

    let single = server
        .post("/api/availabilities")
        .json(&json!({"day": "2025-10-20", "time_slot": "AM", "status": "available", "user_id": 11}))
        .await;
    single.assert_status(StatusCode::CREATED);

    let filtered = server.get("/api/availabilities?user_id=10").await;
    filtered.assert_status_ok();
    let rows: Vec<Value> = filtered.json();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["user"]["user_id"] == 10));
}

#[tokio::test]
async fn role_history_is_append_only_and_newest_first() {
    let (server, _) = setup().await;

    for action in ["created", "revoked"] {
        server
            .post("/api/role_history")
            .json(&json!({
                "user_role_id": 1,
                "user_id": 10,
                "action": action,
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let list = server.get("/api/role_history?user_role_id=1").await;
    list.assert_status_ok();
    let rows: Vec<Value> = list.json();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["action"], "revoked");
    assert_eq!(rows[1]["action"], "created");

    // history has no item routes at all, so updates and deletes cannot exist
    server
        .put("/api/role_history/1")
        .json(&json!({"action": "edited"}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/api/role_history/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_returns_placeholder_token() {
    let (server, _) = setup().await;
    seed_account(&server, 10, "ada@example.edu").await;

    let missing = server.post("/api/auth/login").json(&json!({})).await;
    missing.assert_status(StatusCode::BAD_REQUEST);

    let unknown = server
        .post("/api/auth/login")
        .json(&json!({"email": "nobody@example.edu"}))
        .await;
    unknown.assert_status(StatusCode::UNAUTHORIZED);

    let ok = server
        .post("/api/auth/login")
        .json(&json!({"email": "ada@example.edu", "password": "ignored"}))
        .await;
    ok.assert_status_ok();
    let body: Value = ok.json();
    assert_eq!(body["token"], "mock-token-for-10");
    assert_eq!(body["user_id"], 10);
}

#[tokio::test]
async fn password_reset_flow() {
    let (server, state) = setup().await;
    seed_account(&server, 10, "ada@example.edu").await;

    // unknown email leaves no cache entry behind
    server
        .post("/api/auth/request-password-change")
        .json(&json!({"email": "nobody@example.edu"}))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .post("/api/auth/request-password-change")
        .json(&json!({"email": "ada@example.edu"}))
        .await
        .assert_status_ok();

    // a known token confirms once, then is invalidated
    state
        .reset_tokens
        .insert(10, "known-token".to_string(), RESET_TOKEN_TTL);

    let wrong = server
        .post("/api/auth/confirm-password-change")
        .json(&json!({"uid": "10", "token": "wrong", "new_password": "hunter2"}))
        .await;
    wrong.assert_status(StatusCode::BAD_REQUEST);

    let ok = server
        .post("/api/auth/confirm-password-change")
        .json(&json!({"uid": "10", "token": "known-token", "new_password": "hunter2"}))
        .await;
    ok.assert_status_ok();

    let replay = server
        .post("/api/auth/confirm-password-change")
        .json(&json!({"uid": "10", "token": "known-token", "new_password": "hunter3"}))
        .await;
    replay.assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/api/auth/confirm-password-change")
        .json(&json!({"uid": "10"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_bearer_token_is_rejected_but_anonymous_is_fine() {
    let (server, _) = setup().await;

    server.get("/api/colleges").await.assert_status_ok();

    let rejected = server
        .get("/api/colleges")
        .add_header("authorization", "Bearer not-a-jwt")
        .await;
    rejected.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(rejected.json::<Value>()["error"], "Invalid token.");
}

#[tokio::test]
async fn valid_bearer_token_passes_through() {
    use jsonwebtoken::{EncodingKey, Header, encode};

    let (server, _) = setup().await;

    let claims = json!({
        "sub": "user-1",
        "email": "ada@example.edu",
        "role": "authenticated",
        "exp": chrono::Utc::now().timestamp() + 3600,
    });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(common::TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    server
        .get("/api/colleges")
        .add_header("authorization", format!("Bearer {token}"))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn list_endpoints_paginate_on_request() {
    let (server, _) = setup().await;

    for i in 0..5 {
        server
            .post("/api/buildings")
            .json(&json!({"building_id": format!("B{i}"), "building_name": format!("Building {i}")}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let all: Vec<Value> = server.get("/api/buildings").await.json();
    assert_eq!(all.len(), 5);

    let page: Vec<Value> = server.get("/api/buildings?page=2&per_page=2").await.json();
    assert_eq!(page.len(), 2);
}
