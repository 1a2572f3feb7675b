//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionValidator` - Bearer token validation
//! - `UserRepository` - User persistence

mod session_validator;
mod user_repository;

pub use session_validator::SessionValidator;
pub use user_repository::UserRepository;
