//! HTTP adapters - REST API on axum.
//!
//! Each feature has its own module with `dto`, `handlers` and `routes`;
//! `router` assembles them behind the auth middleware.

pub mod dashboard;
pub mod error;
pub mod mbti;
pub mod middleware;
pub mod router;

pub use error::{ApiError, ErrorResponse};
pub use router::{app_router, AppState, RouterConfig, REQUEST_ID_HEADER};
