//! SubmitAssessmentHandler - Command handler for scoring a completed questionnaire.

use tracing::{info, warn};

use crate::application::handlers::account::UserProvisioner;
use crate::domain::foundation::{AuthenticatedUser, CommandMetadata, DomainError, ErrorCode};
use crate::domain::mbti::{score, AnswerSet, PersonalityType, QuestionId, ScoreCard, QUESTION_COUNT};
use crate::domain::user::User;

/// Command to score a questionnaire and store the result on the user.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub user: AuthenticatedUser,
    pub answers: AnswerSet,
}

/// Result of a successful assessment.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub user: User,
    pub personality_type: PersonalityType,
    pub scores: ScoreCard,
}

/// Message returned when the questionnaire is not fully answered.
pub fn incomplete_assessment_message() -> String {
    format!(
        "Please answer all {} questions before submitting.",
        QUESTION_COUNT
    )
}

/// Handler for assessment submissions.
pub struct SubmitAssessmentHandler {
    users: UserProvisioner,
}

impl SubmitAssessmentHandler {
    pub fn new(users: UserProvisioner) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitAssessmentResult, DomainError> {
        let correlation_id = metadata.correlation_id();

        // 1. Reject partial questionnaires before scoring
        check_complete(&cmd.answers).inspect_err(|e| {
            warn!(
                user_id = %metadata.user_id,
                correlation_id = %correlation_id,
                details = ?e.details,
                "Rejected incomplete assessment"
            );
        })?;

        // 2. Classify
        let scores = score(&cmd.answers);
        let personality_type = scores.personality_type();

        // 3. Record on the user
        let mut user = self.users.load_or_provision(&cmd.user).await?;
        user.record_mbti_result(personality_type);
        self.users.repository().update(&user).await?;

        info!(
            user_id = %user.id,
            correlation_id = %correlation_id,
            source = metadata.source().unwrap_or("-"),
            mbti_type = %personality_type,
            "Recorded MBTI assessment"
        );

        Ok(SubmitAssessmentResult {
            user,
            personality_type,
            scores,
        })
    }
}

fn join_keys(questions: &[QuestionId]) -> String {
    questions
        .iter()
        .map(QuestionId::key)
        .collect::<Vec<_>>()
        .join(",")
}

fn check_complete(answers: &AnswerSet) -> Result<(), DomainError> {
    if answers.is_complete() {
        return Ok(());
    }

    let unanswered = answers.unanswered();
    let out_of_scale = answers.out_of_scale();

    let mut error = DomainError::new(ErrorCode::IncompleteAssessment, incomplete_assessment_message());
    if !unanswered.is_empty() {
        error = error.with_detail("unanswered", join_keys(&unanswered));
    }
    if !out_of_scale.is_empty() {
        error = error.with_detail("out_of_scale", join_keys(&out_of_scale));
    }
    Err(error)
}
