//! Response bodies for the dashboard endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::handlers::DashboardView;
use crate::domain::user::User;

/// Profile fields shown to the signed-in user.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub personality_type: Option<String>,
    pub mbti_type: Option<String>,
    pub date_joined: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            display_name: user.display_name(),
            personality_type: user.personality_type.clone(),
            mbti_type: user.mbti_type.map(|t| t.code()),
            date_joined: *user.date_joined.as_datetime(),
            updated_at: *user.updated_at.as_datetime(),
        }
    }
}

/// GET /api/dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub user: UserProfileResponse,
    /// MBTI result, else personality label, else "Not Set".
    pub mbti_type: String,
}

impl From<DashboardView> for DashboardResponse {
    fn from(view: DashboardView) -> Self {
        Self {
            user: UserProfileResponse::from(&view.user),
            mbti_type: view.mbti_type,
        }
    }
}
