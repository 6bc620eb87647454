// ============================================================================
// Taskboard Infrastructure - PostgreSQL Task Repository
// File: crates/taskboard-infrastructure/src/database/postgres/task_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::error;
use chrono::{DateTime, NaiveDate, Utc};

use taskboard_core::domain::Task;
use taskboard_core::error::DomainError;
use taskboard_core::repositories::TaskRepository;

pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TaskRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            title: row.title,
            description: row.description,
            due_date: row.due_date,
            is_completed: row.is_completed,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Task>, DomainError> {
        let row: Option<TaskRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, due_date, is_completed, user_id, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding task by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_by_owner(&self, user_id: &Uuid) -> Result<Vec<Task>, DomainError> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, due_date, is_completed, user_id, created_at, updated_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY is_completed ASC, due_date ASC NULLS LAST, created_at ASC
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing tasks", e))?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn create(&self, task: &Task) -> Result<Task, DomainError> {
        let row: TaskRow = sqlx::query_as(
            r#"
            INSERT INTO tasks (
                id, title, description, due_date, is_completed, user_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, description, due_date, is_completed, user_id, created_at, updated_at
            "#
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(task.is_completed)
        .bind(task.user_id)
        .bind(task.created_at)
        .bind(task.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating task", e))?;

        Ok(row.into())
    }

    async fn update(&self, task: &Task) -> Result<Option<Task>, DomainError> {
        let row: Option<TaskRow> = sqlx::query_as(
            r#"
            UPDATE tasks
            SET
                title = $3,
                description = $4,
                due_date = $5,
                updated_at = $6
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, description, due_date, is_completed, user_id, created_at, updated_at
            "#
        )
        .bind(task.id)
        .bind(task.user_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(task.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating task", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn toggle_completion(&self, id: &Uuid, user_id: &Uuid) -> Result<Option<Task>, DomainError> {
        let row: Option<TaskRow> = sqlx::query_as(
            r#"
            UPDATE tasks
            SET is_completed = NOT is_completed, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, description, due_date, is_completed, user_id, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("toggling task", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, id: &Uuid, user_id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting task", e))?;

        Ok(result.rows_affected() > 0)
    }
}
