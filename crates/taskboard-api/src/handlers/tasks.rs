//! Task HTTP handlers. All of them require a signed-in user.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::dto::{EditTaskForm, TaskDto, TaskForm};
use crate::error::ApiError;
use crate::extract::{AppForm, AppPath};
use crate::response::ApiResponse;
use crate::session::CurrentUser;
use crate::state::AppState;

/// GET / and GET /tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<TaskDto>>>, ApiError> {
    let tasks = state.tasks.list(&user.user_id).await?;
    Ok(Json(ApiResponse::success(tasks.iter().map(TaskDto::from).collect())))
}

/// POST /tasks/new
pub async fn create_task(
    State(state): State<AppState>,
    user: CurrentUser,
    AppForm(form): AppForm<TaskForm>,
) -> Result<impl IntoResponse, ApiError> {
    let task = state.tasks.create(&user.user_id, form.into_new_task()?).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(TaskDto::from(&task), "Task created.").with_redirect("/")),
    ))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    user: CurrentUser,
    AppPath(task_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<TaskDto>>, ApiError> {
    let task = state.tasks.get(&user.user_id, &task_id).await?;
    Ok(Json(ApiResponse::success(TaskDto::from(&task))))
}

/// POST /tasks/{id}/edit
pub async fn edit_task(
    State(state): State<AppState>,
    user: CurrentUser,
    AppPath(task_id): AppPath<Uuid>,
    AppForm(form): AppForm<EditTaskForm>,
) -> Result<Json<ApiResponse<TaskDto>>, ApiError> {
    let task = state
        .tasks
        .edit(&user.user_id, &task_id, form.into_changes()?)
        .await?;

    Ok(Json(
        ApiResponse::success_with_message(TaskDto::from(&task), "Task updated.").with_redirect("/"),
    ))
}

/// POST /tasks/{id}/toggle
pub async fn toggle_task(
    State(state): State<AppState>,
    user: CurrentUser,
    AppPath(task_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<TaskDto>>, ApiError> {
    let task = state.tasks.toggle(&user.user_id, &task_id).await?;

    Ok(Json(
        ApiResponse::success_with_message(TaskDto::from(&task), "Task status updated.").with_redirect("/"),
    ))
}

/// POST /tasks/{id}/delete
pub async fn delete_task(
    State(state): State<AppState>,
    user: CurrentUser,
    AppPath(task_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.tasks.delete(&user.user_id, &task_id).await?;
    Ok(Json(ApiResponse::success_with_message((), "Task deleted.").with_redirect("/")))
}
