//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - Users and their personality profile

mod user_repository;

pub use user_repository::PostgresUserRepository;
