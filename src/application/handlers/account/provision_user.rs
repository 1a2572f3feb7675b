//! Resolves the local user record for an authenticated identity.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Loads the user behind a token, creating the record on first sight.
#[derive(Clone)]
pub struct UserProvisioner {
    repository: Arc<dyn UserRepository>,
}

impl UserProvisioner {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn UserRepository> {
        &self.repository
    }

    /// Returns the stored user, provisioning one if none exists yet.
    ///
    /// Two first requests racing each other both end up with the same record:
    /// the loser of the insert re-reads what the winner stored.
    pub async fn load_or_provision(&self, auth: &AuthenticatedUser) -> Result<User, DomainError> {
        if let Some(user) = self.repository.find_by_id(&auth.id).await? {
            return Ok(user);
        }

        let user = User::provision(auth);
        match self.repository.create(&user).await {
            Ok(()) => {
                info!(user_id = %user.id, "Provisioned new user");
                Ok(user)
            }
            Err(e) if e.code == ErrorCode::UserExists => self
                .repository
                .find_by_id(&auth.id)
                .await?
                .ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::InternalError,
                        format!("User {} vanished after concurrent creation", auth.id),
                    )
                }),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::UserId;
    use async_trait::async_trait;

    fn auth(id: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(id).unwrap(),
            format!("{}@example.com", id),
            Some("Grace Hopper".to_string()),
            true,
        )
    }

    #[tokio::test]
    async fn first_request_provisions_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let provisioner = UserProvisioner::new(repo.clone());

        let user = provisioner.load_or_provision(&auth("user-1")).await.unwrap();

        assert_eq!(user.first_name, "Grace");
        assert_eq!(repo.user_count().await, 1);
    }

    #[tokio::test]
    async fn existing_user_is_returned_unchanged() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let mut stored = User::provision(&auth("user-1"));
        stored.record_mbti_result("INTP".parse().unwrap());
        repo.create(&stored).await.unwrap();

        let provisioner = UserProvisioner::new(repo.clone());
        let user = provisioner.load_or_provision(&auth("user-1")).await.unwrap();

        assert_eq!(user.displayed_type(), "INTP");
        assert_eq!(repo.user_count().await, 1);
    }

    /// Reports no user on the first lookup, then behaves like the inner repo.
    struct RacingRepository {
        inner: InMemoryUserRepository,
        lookups: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl UserRepository for RacingRepository {
        async fn create(&self, user: &User) -> Result<(), DomainError> {
            self.inner.create(user).await
        }

        async fn update(&self, user: &User) -> Result<(), DomainError> {
            self.inner.update(user).await
        }

        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
            let n = self
                .lookups
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if n == 0 {
                Ok(None)
            } else {
                self.inner.find_by_id(id).await
            }
        }
    }

    #[tokio::test]
    async fn lost_insert_race_rereads_winner() {
        let inner = InMemoryUserRepository::new();
        let mut winner = User::provision(&auth("user-1"));
        winner.record_mbti_result("ESFJ".parse().unwrap());
        inner.create(&winner).await.unwrap();

        let repo = Arc::new(RacingRepository {
            inner,
            lookups: Default::default(),
        });
        let provisioner = UserProvisioner::new(repo);

        let user = provisioner.load_or_provision(&auth("user-1")).await.unwrap();

        assert_eq!(user.displayed_type(), "ESFJ");
    }
}
