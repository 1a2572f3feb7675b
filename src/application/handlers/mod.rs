//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod dashboard;
pub mod mbti;

pub use account::UserProvisioner;
pub use dashboard::{DashboardView, GetDashboardHandler, GetDashboardQuery};
pub use mbti::{
    incomplete_assessment_message, SubmitAssessmentCommand, SubmitAssessmentHandler,
    SubmitAssessmentResult,
};
