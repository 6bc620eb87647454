// ============================================================================
// Taskboard Core - Task Entity
// File: crates/taskboard-core/src/domain/task.rs
// Description: Personal to-do item owned by exactly one user
// ============================================================================

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::no_nul_bytes;

/// Task entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Task {
    pub id: Uuid,

    #[validate(
        length(min = 1, max = 200, message = "Title is required (max 200 characters)"),
        custom(function = "no_nul_bytes")
    )]
    pub title: String,

    #[validate(custom(function = "no_nul_bytes"))]
    pub description: Option<String>,

    pub due_date: Option<NaiveDate>,

    pub is_completed: bool,

    /// Owning user
    pub user_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a task
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Partial update. `None` leaves a field untouched; `Some(None)` clears an
/// optional field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none()
    }
}

impl Task {
    /// Create new task for `user_id`, not completed
    pub fn new(user_id: Uuid, new_task: NewTask) -> Result<Self, validator::ValidationErrors> {
        let now = Utc::now();
        let task = Self {
            id: taskboard_shared::new_id(),
            title: new_task.title.trim().to_string(),
            description: normalize_description(new_task.description),
            due_date: new_task.due_date,
            is_completed: false,
            user_id,
            created_at: now,
            updated_at: now,
        };

        task.validate()?;
        Ok(task)
    }

    /// Overdue relative to the local calendar date
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(Local::now().date_naive())
    }

    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today && !self.is_completed,
            None => false,
        }
    }

    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.user_id == *user_id
    }

    /// Flip completion
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
        self.updated_at = Utc::now();
    }

    /// Apply supplied fields only; completion and ownership never change here.
    pub fn apply(&mut self, changes: TaskChanges) -> Result<(), validator::ValidationErrors> {
        let mut updated = self.clone();
        if let Some(title) = changes.title {
            updated.title = title.trim().to_string();
        }
        if let Some(description) = changes.description {
            updated.description = normalize_description(description);
        }
        if let Some(due_date) = changes.due_date {
            updated.due_date = due_date;
        }
        updated.validate()?;

        updated.updated_at = Utc::now();
        *self = updated;
        Ok(())
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
