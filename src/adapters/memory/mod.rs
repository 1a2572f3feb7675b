//! In-memory adapters for tests and database-less runs.

mod user_repository;

pub use user_repository::InMemoryUserRepository;
