//! HTTP handler for the dashboard endpoint.

use axum::{extract::State, Json};

use super::dto::DashboardResponse;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::router::AppState;
use crate::application::handlers::GetDashboardQuery;

/// GET /api/dashboard - Profile and personality type of the signed-in user
pub async fn get_dashboard(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DashboardResponse>, ApiError> {
    let view = state
        .dashboard_handler()
        .handle(GetDashboardQuery { user })
        .await?;
    Ok(Json(view.into()))
}
