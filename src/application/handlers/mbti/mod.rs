//! MBTI assessment command handlers.

mod submit_assessment;

pub use submit_assessment::{
    incomplete_assessment_message, SubmitAssessmentCommand, SubmitAssessmentHandler,
    SubmitAssessmentResult,
};
