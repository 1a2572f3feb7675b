//! MBTI assessment HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use routes::mbti_routes;
