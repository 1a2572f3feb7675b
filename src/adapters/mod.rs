//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Session validators (JWT, mock)
//! - `http` - axum REST API
//! - `memory` - In-memory user repository
//! - `postgres` - PostgreSQL user repository

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtConfig, JwtSessionValidator, MockSessionValidator};
pub use memory::InMemoryUserRepository;
pub use postgres::PostgresUserRepository;
