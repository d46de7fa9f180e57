//! Integration tests for the content-generation endpoints.
//!
//! These cover the request-validation and CORS contract; the happy path
//! requires a live completion endpoint and is covered by the gateway's
//! parser tests instead.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, post_json};
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: missing fields are rejected with a field-level 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quiz_questions_missing_module_name_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/generateQuizQuestions",
        json!({ "proficiencyScore": 0, "moduleDescription": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(
        body["error"].as_str().unwrap().contains("moduleName"),
        "error should name the missing field, got: {}",
        body["error"]
    );
}

#[tokio::test]
async fn study_plan_missing_weak_topics_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/generateStudyPlan",
        json!({
            "moduleName": "Rust",
            "moduleDescription": "systems programming",
            "proficiency": 20
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("weakTopics"));
}

#[tokio::test]
async fn project_missing_proficiency_level_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(app, "/generateProject", json!({ "moduleName": "Rust" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("proficiencyLevel"));
}

// ---------------------------------------------------------------------------
// Test: out-of-range scores are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quiz_questions_score_out_of_range_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/generateQuizQuestions",
        json!({
            "moduleName": "Rust",
            "proficiencyScore": 101,
            "moduleDescription": "systems programming"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("proficiencyScore"));
}

#[tokio::test]
async fn negative_proficiency_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/generateStudyPlan",
        json!({
            "moduleName": "Rust",
            "moduleDescription": "systems programming",
            "proficiency": -5,
            "weakTopics": ["Lifetimes"]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight returns 204 with CORS headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_204_with_headers() {
    for path in [
        "/generateQuizQuestions",
        "/generateStudyPlan",
        "/generateProject",
    ] {
        let app = common::build_test_app();

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(path)
            .header("Origin", "http://localhost:5173")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::NO_CONTENT,
            "preflight on {path} should return 204"
        );

        let headers = response.headers();

        let allow_origin = headers
            .get("access-control-allow-origin")
            .expect("Missing Access-Control-Allow-Origin header")
            .to_str()
            .unwrap();
        assert_eq!(allow_origin, "http://localhost:5173");

        let allow_methods = headers
            .get("access-control-allow-methods")
            .expect("Missing Access-Control-Allow-Methods header")
            .to_str()
            .unwrap();
        assert!(
            allow_methods.contains("POST"),
            "Allow-Methods should contain POST, got: {allow_methods}"
        );
    }
}
