//! Task service: per-user CRUD with ownership checks

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{NewTask, Task, TaskChanges};
use crate::error::DomainError;
use crate::repositories::TaskRepository;

pub struct TaskService {
    task_repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self { task_repo }
    }

    pub async fn create(&self, owner_id: &Uuid, new_task: NewTask) -> Result<Task, DomainError> {
        let task = Task::new(*owner_id, new_task)?;
        let created = self.task_repo.create(&task).await?;
        info!("Task {} created for user {}", created.id, owner_id);
        Ok(created)
    }

    pub async fn list(&self, owner_id: &Uuid) -> Result<Vec<Task>, DomainError> {
        self.task_repo.list_by_owner(owner_id).await
    }

    pub async fn get(&self, owner_id: &Uuid, task_id: &Uuid) -> Result<Task, DomainError> {
        self.load_owned(owner_id, task_id).await
    }

    pub async fn edit(
        &self,
        owner_id: &Uuid,
        task_id: &Uuid,
        changes: TaskChanges,
    ) -> Result<Task, DomainError> {
        let mut task = self.load_owned(owner_id, task_id).await?;
        if changes.is_empty() {
            return Ok(task);
        }

        task.apply(changes)?;

        let updated = self
            .task_repo
            .update(&task)
            .await?
            .ok_or_else(|| not_found(task_id))?;
        info!("Task {} updated", task_id);
        Ok(updated)
    }

    pub async fn toggle(&self, owner_id: &Uuid, task_id: &Uuid) -> Result<Task, DomainError> {
        self.load_owned(owner_id, task_id).await?;

        let toggled = self
            .task_repo
            .toggle_completion(task_id, owner_id)
            .await?
            .ok_or_else(|| not_found(task_id))?;
        info!("Task {} completion set to {}", task_id, toggled.is_completed);
        Ok(toggled)
    }

    pub async fn delete(&self, owner_id: &Uuid, task_id: &Uuid) -> Result<(), DomainError> {
        self.load_owned(owner_id, task_id).await?;

        if !self.task_repo.delete(task_id, owner_id).await? {
            return Err(not_found(task_id));
        }
        info!("Task {} deleted", task_id);
        Ok(())
    }

    /// NotFound when missing, Forbidden when owned by someone else.
    async fn load_owned(&self, owner_id: &Uuid, task_id: &Uuid) -> Result<Task, DomainError> {
        let task = self
            .task_repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| not_found(task_id))?;

        if !task.is_owned_by(owner_id) {
            warn!("User {} denied access to task {}", owner_id, task_id);
            return Err(DomainError::Forbidden(format!("task {}", task_id)));
        }

        Ok(task)
    }
}

fn not_found(task_id: &Uuid) -> DomainError {
    DomainError::NotFound(format!("task {}", task_id))
}
