//! Dashboard HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use routes::dashboard_routes;
