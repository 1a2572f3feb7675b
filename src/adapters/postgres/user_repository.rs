//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::mbti::PersonalityType;
use crate::domain::user::User;
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    personality_type: Option<String>,
    mbti_type: Option<String>,
    date_joined: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = UserId::new(row.id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
        })?;

        let mbti_type = row
            .mbti_type
            .as_deref()
            .map(str::parse::<PersonalityType>)
            .transpose()
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid mbti_type: {}", e))
            })?;

        Ok(User {
            id,
            username: row.username,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            personality_type: row.personality_type,
            mbti_type,
            date_joined: Timestamp::from_datetime(row.date_joined),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                id, username, email, first_name, last_name,
                personality_type, mbti_type, date_joined, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.id.as_str())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.personality_type.as_deref())
        .bind(user.mbti_type.map(|t| t.code()))
        .bind(user.date_joined.as_datetime())
        .bind(user.updated_at.as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                DomainError::new(ErrorCode::UserExists, format!("User already exists: {}", user.id)),
            ),
            Err(e) => Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert user: {}", e),
            )),
        }
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                username = $2,
                email = $3,
                first_name = $4,
                last_name = $5,
                personality_type = $6,
                mbti_type = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(user.id.as_str())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.personality_type.as_deref())
        .bind(user.mbti_type.map(|t| t.code()))
        .bind(user.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update user: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", user.id),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, first_name, last_name,
                   personality_type, mbti_type, date_joined, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch user: {}", e),
            )
        })?;

        row.map(User::try_from).transpose()
    }
}
