//! PostgreSQL repository implementations

pub mod user_repo_impl;
pub mod task_repo_impl;
pub mod session_repo_impl;

pub use user_repo_impl::PgUserRepository;
pub use task_repo_impl::PgTaskRepository;
pub use session_repo_impl::PgSessionRepository;

use sqlx::error::ErrorKind;

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| matches!(db.kind(), ErrorKind::UniqueViolation))
        .unwrap_or(false)
}
