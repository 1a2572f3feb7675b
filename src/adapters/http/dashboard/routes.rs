//! HTTP routes for the dashboard endpoint.

use axum::{routing::get, Router};

use super::handlers::get_dashboard;
use crate::adapters::http::router::AppState;

/// Dashboard routes, merged into the `/api` router.
///
/// Both `/dashboard` and `/dashboard/` are served.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/", get(get_dashboard))
}
