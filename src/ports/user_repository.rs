//! UserRepository port for user persistence.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Repository for application users.
///
/// # Contract
///
/// - `create` fails with `ErrorCode::UserExists` when the id is taken
/// - `update` fails with `ErrorCode::UserNotFound` when the id is unknown
/// - infrastructure failures map to `ErrorCode::DatabaseError`
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Overwrite the profile fields of an existing user.
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
}
