//! # Taskboard API
//! 
//! HTTP handlers, session extraction, form DTOs, and response shaping.

pub mod handlers;
pub mod dto;
pub mod error;
pub mod extract;
pub mod response;
pub mod routes;
pub mod session;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
