//! # Taskboard Core - Domain Module
//! 
//! Domain entities for the task tracker.

pub mod user;
pub mod task;

pub use user::User;
pub use task::{NewTask, Task, TaskChanges};

use validator::ValidationError;

/// PostgreSQL text columns cannot hold NUL.
pub(crate) fn no_nul_bytes(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut error = ValidationError::new("nul_byte");
        error.message = Some("Text must not contain NUL characters".into());
        return Err(error);
    }
    Ok(())
}
