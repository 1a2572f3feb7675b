//! GetDashboardHandler - Query handler for the signed-in user's dashboard.

use tracing::debug;

use crate::application::handlers::account::UserProvisioner;
use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::domain::user::User;

/// Query for the dashboard of the authenticated user.
#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub user: AuthenticatedUser,
}

/// What the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub user: User,
    /// MBTI result, else personality label, else "Not Set".
    pub mbti_type: String,
}

/// Handler for dashboard queries.
pub struct GetDashboardHandler {
    users: UserProvisioner,
}

impl GetDashboardHandler {
    pub fn new(users: UserProvisioner) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<DashboardView, DomainError> {
        let user = self.users.load_or_provision(&query.user).await?;
        let mbti_type = user.displayed_type();
        debug!(user_id = %user.id, mbti_type = %mbti_type, "Loaded dashboard");
        Ok(DashboardView { user, mbti_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::UserId;
    use crate::ports::UserRepository;
    use std::sync::Arc;

    fn auth() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-1").unwrap(),
            "user-1@example.com",
            Some("Alan Turing".to_string()),
            true,
        )
    }

    async fn view_with(stored: Option<User>) -> DashboardView {
        let repo = Arc::new(InMemoryUserRepository::new());
        if let Some(user) = stored {
            repo.create(&user).await.unwrap();
        }
        GetDashboardHandler::new(UserProvisioner::new(repo))
            .handle(GetDashboardQuery { user: auth() })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn new_user_sees_not_set() {
        let view = view_with(None).await;

        assert_eq!(view.mbti_type, "Not Set");
        assert_eq!(view.user.display_name(), "Alan Turing");
    }

    #[tokio::test]
    async fn assessed_user_sees_mbti_type() {
        let mut user = User::provision(&auth());
        user.record_mbti_result("ISTJ".parse().unwrap());

        let view = view_with(Some(user)).await;

        assert_eq!(view.mbti_type, "ISTJ");
    }

    #[tokio::test]
    async fn label_is_shown_when_no_assessment() {
        let mut user = User::provision(&auth());
        user.set_personality_label(Some("Night owl".to_string())).unwrap();

        let view = view_with(Some(user)).await;

        assert_eq!(view.mbti_type, "Night owl");
    }
}
