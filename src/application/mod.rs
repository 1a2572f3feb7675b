//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations and coordinates between ports. Commands
//! (assessment submission) are kept apart from queries (dashboard).

pub mod handlers;

pub use handlers::{
    DashboardView, GetDashboardHandler, GetDashboardQuery, SubmitAssessmentCommand,
    SubmitAssessmentHandler, SubmitAssessmentResult, UserProvisioner,
};
