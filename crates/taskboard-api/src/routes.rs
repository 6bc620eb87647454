use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use crate::handlers::{auth, health, tasks};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout));

    // Task routes; the CurrentUser extractor redirects anonymous requests
    let task_routes = Router::new()
        .route("/", get(tasks::list_tasks))
        .route("/tasks", get(tasks::list_tasks))
        .route("/tasks/new", post(tasks::create_task))
        .route("/tasks/{id}", get(tasks::get_task))
        .route("/tasks/{id}/edit", post(tasks::edit_task))
        .route("/tasks/{id}/toggle", post(tasks::toggle_task))
        .route("/tasks/{id}/delete", post(tasks::delete_task));

    Router::new()
        .merge(public_routes)
        .merge(task_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(state)
}
