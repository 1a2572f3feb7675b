//! Request and response bodies for the assessment endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::mbti::{
    AnswerSet, DimensionScore, QuestionDescriptor, ScoreCard, QUESTION_COUNT, SCALE_MAX, SCALE_MIN,
};

/// Where clients go after a successful submission.
pub const DASHBOARD_PATH: &str = "/api/dashboard";

/// GET /api/mbti/questionnaire
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub question_count: u8,
    pub scale_min: i64,
    pub scale_max: i64,
    pub questions: Vec<QuestionDescriptor>,
}

impl From<Vec<QuestionDescriptor>> for QuestionnaireResponse {
    fn from(questions: Vec<QuestionDescriptor>) -> Self {
        Self {
            question_count: QUESTION_COUNT,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            questions,
        }
    }
}

/// POST /api/mbti/assessment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitAssessmentRequest {
    #[serde(default)]
    pub answers: AnswerSet,
}

/// Totals of one preference pair.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionScoreResponse {
    /// Pair code such as "E/I".
    pub dimension: String,
    /// Letter to total, e.g. `{"E": 12, "I": 7}`.
    pub totals: BTreeMap<String, i64>,
    pub winner: String,
    pub tie: bool,
}

impl From<&DimensionScore> for DimensionScoreResponse {
    fn from(score: &DimensionScore) -> Self {
        let mut totals = BTreeMap::new();
        totals.insert(score.dimension.direct().to_string(), score.direct_total);
        totals.insert(score.dimension.reverse().to_string(), score.reverse_total);
        Self {
            dimension: score.dimension.code(),
            totals,
            winner: score.winner().to_string(),
            tie: score.is_tie(),
        }
    }
}

/// Result of a scored assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub mbti_type: String,
    pub message: String,
    pub scores: Vec<DimensionScoreResponse>,
    pub redirect_to: String,
}

impl AssessmentResponse {
    pub fn new(mbti_type: String, scores: &ScoreCard) -> Self {
        Self {
            message: format!("Your MBTI type is: {}", mbti_type),
            mbti_type,
            scores: scores.scores().iter().map(Into::into).collect(),
            redirect_to: DASHBOARD_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mbti::{questionnaire, score};

    #[test]
    fn request_accepts_mixed_answer_types() {
        let req: SubmitAssessmentRequest =
            serde_json::from_str(r#"{"answers": {"q1": 5, "q2": "3"}}"#).unwrap();
        assert_eq!(req.answers.len(), 2);
    }

    #[test]
    fn request_without_answers_is_empty() {
        let req: SubmitAssessmentRequest = serde_json::from_str("{}").unwrap();
        assert!(req.answers.is_empty());
    }

    #[test]
    fn questionnaire_response_lists_twenty_questions() {
        let json = serde_json::to_value(QuestionnaireResponse::from(questionnaire())).unwrap();

        assert_eq!(json["question_count"], 20);
        assert_eq!(json["questions"].as_array().unwrap().len(), 20);
        assert_eq!(json["questions"][0]["id"], "q1");
    }

    #[test]
    fn assessment_response_describes_each_dimension() {
        let card = score(&AnswerSet::new());
        let response = AssessmentResponse::new("INFP".to_string(), &card);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["message"], "Your MBTI type is: INFP");
        assert_eq!(json["redirect_to"], "/api/dashboard");
        assert_eq!(json["scores"][0]["dimension"], "E/I");
        assert_eq!(json["scores"][0]["totals"]["E"], 0);
        assert_eq!(json["scores"][0]["totals"]["I"], 6);
        assert_eq!(json["scores"][0]["winner"], "I");
    }
}
