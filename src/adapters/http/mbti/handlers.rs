//! HTTP handlers for the MBTI assessment endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};

use super::dto::{AssessmentResponse, QuestionnaireResponse, SubmitAssessmentRequest};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::router::{command_metadata, AppState};
use crate::application::handlers::SubmitAssessmentCommand;
use crate::domain::mbti::questionnaire;

/// GET /api/mbti/questionnaire - Question descriptors for rendering the quiz
pub async fn get_questionnaire(RequireAuth(_user): RequireAuth) -> Json<QuestionnaireResponse> {
    Json(questionnaire().into())
}

/// POST /api/mbti/assessment - Score answers and store the type on the user
pub async fn submit_assessment(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    payload: Result<Json<SubmitAssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let Json(req) = payload?;

    let metadata = command_metadata(&user, &headers);
    let cmd = SubmitAssessmentCommand {
        user,
        answers: req.answers,
    };

    let result = state.submit_assessment_handler().handle(cmd, metadata).await?;

    Ok(Json(AssessmentResponse::new(
        result.personality_type.code(),
        &result.scores,
    )))
}
