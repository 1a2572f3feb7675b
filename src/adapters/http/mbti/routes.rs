//! HTTP routes for the MBTI assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_questionnaire, submit_assessment};
use crate::adapters::http::router::AppState;

/// Routes mounted under `/api/mbti`.
pub fn mbti_routes() -> Router<AppState> {
    Router::new()
        .route("/questionnaire", get(get_questionnaire))
        .route("/assessment", post(submit_assessment))
}
