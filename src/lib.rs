//! Mirror Mind - user profiles and MBTI personality assessment
//!
//! Users sign in with a bearer token, answer a 20-question Likert
//! questionnaire, and get one of the sixteen four-letter personality types
//! stored on their profile and shown on their dashboard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
