//! Top-level router: API routes, auth, and the cross-cutting tower layers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::dashboard::dashboard_routes;
use super::mbti::mbti_routes;
use super::middleware::{auth_middleware, AuthState};
use crate::application::handlers::{GetDashboardHandler, SubmitAssessmentHandler, UserProvisioner};
use crate::domain::foundation::{AuthenticatedUser, CommandMetadata};
use crate::ports::{SessionValidator, UserRepository};

/// Request id header set on the way in and echoed on the way out.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub session_validator: Arc<dyn SessionValidator>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        session_validator: Arc<dyn SessionValidator>,
    ) -> Self {
        Self {
            users,
            session_validator,
        }
    }

    fn provisioner(&self) -> UserProvisioner {
        UserProvisioner::new(self.users.clone())
    }

    pub fn submit_assessment_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(self.provisioner())
    }

    pub fn dashboard_handler(&self) -> GetDashboardHandler {
        GetDashboardHandler::new(self.provisioner())
    }
}

/// Cross-cutting router settings.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins; empty allows any.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Builds command metadata for an authenticated request.
pub fn command_metadata(user: &AuthenticatedUser, headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new(user.id.clone()).with_source("http");
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        Some(request_id) => metadata.with_correlation_id(request_id),
        None => metadata,
    }
}

/// GET /health - Liveness check
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn request_span(request: &Request) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Creates the application router.
///
/// ```text
/// GET  /health
/// GET  /api/mbti/questionnaire
/// POST /api/mbti/assessment
/// GET  /api/dashboard
/// ```
pub fn app_router(state: AppState, config: &RouterConfig) -> Router {
    let auth_state: AuthState = state.session_validator.clone();
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let api = Router::new()
        .nest("/mbti", mbti_routes())
        .merge(dashboard_routes())
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
        // Outermost layer last: the request id exists before tracing starts.
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config.cors_origins))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::UserId;
    use axum::body::{to_bytes, Body};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    fn router() -> Router {
        let state = AppState::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(MockSessionValidator::new().with_test_user("token", "user-1")),
        );
        app_router(state, &RouterConfig::default())
    }

    #[tokio::test]
    async fn health_needs_no_auth() {
        let response = router()
            .oneshot(axum::http::Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let response = router()
            .oneshot(axum::http::Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn incoming_request_id_is_echoed() {
        let response = router()
            .oneshot(
                axum::http::Request::get("/health")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn api_routes_require_token() {
        let response = router()
            .oneshot(axum::http::Request::get("/api/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn dashboard_accepts_trailing_slash() {
        for uri in ["/api/dashboard", "/api/dashboard/"] {
            let response = router()
                .oneshot(
                    axum::http::Request::get(uri)
                        .header(header::AUTHORIZATION, "Bearer token")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        }
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = router()
            .oneshot(axum::http::Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn command_metadata_uses_request_id() {
        let user = AuthenticatedUser::new(UserId::new("u").unwrap(), "u@x.io", None, true);
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-42"));

        let metadata = command_metadata(&user, &headers);

        assert_eq!(metadata.correlation_id(), "req-42");
        assert_eq!(metadata.source(), Some("http"));
    }

    #[test]
    fn invalid_cors_origins_are_skipped() {
        // Builds without panicking even with a bad entry.
        let _ = cors_layer(&["http://localhost:5173".to_string(), "bad\norigin".to_string()]);
    }
}
