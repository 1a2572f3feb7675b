//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `mbti` - Personality questionnaire scoring
//! - `user` - Users and their personality profile

pub mod foundation;
pub mod mbti;
pub mod user;
