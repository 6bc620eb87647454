//! Domain services (business logic)

pub mod auth_service;
pub mod task_service;

pub use auth_service::{AuthService, LoginResult};
pub use task_service::TaskService;
