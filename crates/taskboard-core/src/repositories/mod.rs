//! Repository traits (ports)

pub mod user_repository;
pub mod task_repository;
pub mod session_repository;
pub mod health;

pub use user_repository::UserRepository;
pub use task_repository::TaskRepository;
pub use session_repository::SessionRepository;
pub use health::DatabaseHealth;

#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
