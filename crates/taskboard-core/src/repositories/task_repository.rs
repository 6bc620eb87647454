//! Task repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;
use crate::domain::Task;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Task>, DomainError>;
    /// Incomplete first, then by due date (undated last), then oldest first.
    async fn list_by_owner(&self, user_id: &Uuid) -> Result<Vec<Task>, DomainError>;
    async fn create(&self, task: &Task) -> Result<Task, DomainError>;
    /// Persists title, description and due date only. `None` when no row
    /// matches both id and owner.
    async fn update(&self, task: &Task) -> Result<Option<Task>, DomainError>;
    /// Flips completion in a single statement. `None` when no row matches.
    async fn toggle_completion(&self, id: &Uuid, user_id: &Uuid) -> Result<Option<Task>, DomainError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: &Uuid, user_id: &Uuid) -> Result<bool, DomainError>;
}
