//! Form DTOs (requests) and response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use taskboard_core::domain::{NewTask, Task, TaskChanges, User};

use crate::error::ApiError;

/// `POST /register`
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 80, message = "Username is required (max 80 characters)"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 128, message = "Password is required (max 128 characters)"))]
    pub password: String,

    #[serde(default)]
    pub confirm: String,
}

/// `POST /login`
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

/// `POST /tasks/new`
#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

impl TaskForm {
    pub fn into_new_task(self) -> Result<NewTask, ApiError> {
        let due_date = match self.due_date {
            Some(raw) => parse_due_date(&raw)?,
            None => None,
        };
        Ok(NewTask {
            title: self.title,
            description: self.description,
            due_date,
        })
    }
}

/// `POST /tasks/{id}/edit`. Absent fields stay untouched; an empty
/// `description` or `due_date` clears the value.
#[derive(Debug, Default, Deserialize)]
pub struct EditTaskForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

impl EditTaskForm {
    pub fn into_changes(self) -> Result<TaskChanges, ApiError> {
        let due_date = match self.due_date {
            Some(raw) => Some(parse_due_date(&raw)?),
            None => None,
        };
        Ok(TaskChanges {
            title: self.title,
            description: self.description.map(|d| Some(d).filter(|d| !d.trim().is_empty())),
            due_date,
        })
    }
}

/// `YYYY-MM-DD`, zero padding optional. Blank means no date.
pub fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ApiError::BadRequest(format!("Invalid due date '{}', expected YYYY-MM-DD", raw)))
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub is_overdue: bool,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            is_completed: task.is_completed,
            is_overdue: task.is_overdue(),
            user_id: task.user_id,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}
