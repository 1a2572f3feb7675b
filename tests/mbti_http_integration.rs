//! End-to-end tests for the assessment and dashboard endpoints.
//!
//! The full router runs against the in-memory repository; tokens are
//! resolved by `MockSessionValidator` except where the JWT path is covered.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use mirror_mind::adapters::http::{app_router, AppState, RouterConfig};
use mirror_mind::adapters::{
    InMemoryUserRepository, JwtConfig, JwtSessionValidator, MockSessionValidator,
};
use mirror_mind::domain::foundation::UserId;
use mirror_mind::ports::UserRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

const TOKEN: &str = "test-token";

struct TestApp {
    router: Router,
    users: Arc<InMemoryUserRepository>,
}

impl TestApp {
    fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let validator = Arc::new(MockSessionValidator::new().with_test_user(TOKEN, "user-1"));
        let router = app_router(
            AppState::new(users.clone(), validator),
            &RouterConfig::default(),
        );
        Self { router, users }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::get(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn submit(&self, body: Value, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::post("/api/mbti/assessment")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }
}

/// Every question answered with the same value.
fn uniform_answers(value: i64) -> Value {
    let answers: serde_json::Map<String, Value> =
        (1..=20).map(|n| (format!("q{}", n), json!(value))).collect();
    json!({ "answers": answers })
}

// =============================================================================
// Questionnaire
// =============================================================================

#[tokio::test]
async fn questionnaire_lists_all_questions() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/mbti/questionnaire", Some(TOKEN)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question_count"], 20);
    assert_eq!(body["scale_min"], 1);
    assert_eq!(body["scale_max"], 5);
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 20);
    assert_eq!(questions[1]["id"], "q2");
    assert_eq!(questions[1]["keying"], "reverse");
}

#[tokio::test]
async fn questionnaire_requires_login() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/mbti/questionnaire", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");
}

// =============================================================================
// Assessment
// =============================================================================

#[tokio::test]
async fn full_flow_assessment_then_dashboard() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/dashboard", Some(TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mbti_type"], "Not Set");

    let (status, body) = app.submit(uniform_answers(5), Some(TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mbti_type"], "ESTJ");
    assert_eq!(body["message"], "Your MBTI type is: ESTJ");
    assert_eq!(body["redirect_to"], "/api/dashboard");
    assert_eq!(body["scores"].as_array().unwrap().len(), 4);

    let (status, body) = app.get("/api/dashboard", Some(TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mbti_type"], "ESTJ");
    assert_eq!(body["user"]["id"], "user-1");
    assert_eq!(body["user"]["personality_type"], "ESTJ");
}

#[tokio::test]
async fn string_answers_are_accepted() {
    let app = TestApp::new();
    let answers: serde_json::Map<String, Value> =
        (1..=20).map(|n| (format!("q{}", n), json!("1"))).collect();

    let (status, body) = app.submit(json!({ "answers": answers }), Some(TOKEN)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mbti_type"], "INFP");
}

#[tokio::test]
async fn incomplete_submission_is_rejected_and_nothing_saved() {
    let app = TestApp::new();
    let mut body = uniform_answers(4);
    body["answers"].as_object_mut().unwrap().remove("q13");

    let (status, body) = app.submit(body, Some(TOKEN)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INCOMPLETE_ASSESSMENT");
    assert_eq!(
        body["message"],
        "Please answer all 20 questions before submitting."
    );
    assert_eq!(body["details"]["unanswered"], "q13");

    let id = UserId::new("user-1").unwrap();
    assert!(app.users.find_by_id(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn out_of_scale_answer_is_rejected() {
    let app = TestApp::new();
    let mut body = uniform_answers(3);
    body["answers"]["q8"] = json!(7);

    let (status, body) = app.submit(body, Some(TOKEN)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["out_of_scale"], "q8");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::new();
    let request = Request::post("/api/mbti/assessment")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn submission_requires_login() {
    let app = TestApp::new();

    let (status, _) = app.submit(uniform_answers(3), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.users.user_count().await, 0);
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/dashboard", Some("stolen")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH_ERROR");
}

#[tokio::test]
async fn retaking_the_assessment_replaces_the_type() {
    let app = TestApp::new();

    app.submit(uniform_answers(5), Some(TOKEN)).await;
    let (_, body) = app.submit(uniform_answers(1), Some(TOKEN)).await;
    assert_eq!(body["mbti_type"], "INFP");

    let (_, body) = app.get("/api/dashboard", Some(TOKEN)).await;
    assert_eq!(body["mbti_type"], "INFP");
    assert_eq!(app.users.user_count().await, 1);
}

// =============================================================================
// JWT validation
// =============================================================================

#[tokio::test]
async fn signed_jwt_authenticates_against_real_validator() {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use secrecy::SecretString;

    const SECRET: &str = "integration-test-secret-of-32-bytes!";

    let users = Arc::new(InMemoryUserRepository::new());
    let validator = Arc::new(JwtSessionValidator::new(JwtConfig::new(
        "mirror-mind",
        "mirror-mind-api",
        SecretString::new(SECRET.to_string()),
    )));
    let router = app_router(AppState::new(users, validator), &RouterConfig::default());

    let exp = chrono::Utc::now().timestamp() + 600;
    let claims = json!({
        "sub": "jwt-user",
        "iss": "mirror-mind",
        "aud": "mirror-mind-api",
        "exp": exp,
        "email": "jwt@example.com",
        "name": "Jay Dub",
    });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let response = router
        .oneshot(
            Request::get("/api/dashboard")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["user"]["id"], "jwt-user");
    assert_eq!(body["user"]["first_name"], "Jay");
}
