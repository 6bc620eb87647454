mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::NaiveDate;
use uuid::Uuid;

use common::{json_body, TestApp};
use taskboard_core::domain::{NewTask, Task};

fn seed_task(app: &TestApp, owner: &Uuid, title: &str) -> Task {
    let task = Task::new(
        *owner,
        NewTask {
            title: title.to_string(),
            description: None,
            due_date: None,
        },
    )
    .unwrap();
    app.store.insert_task(task)
}

async fn signed_in(app: &TestApp) -> (Uuid, String) {
    let user = app.store.insert_user("testuser", "testpass");
    let cookie = app.login("testuser", "testpass").await;
    (user.id, cookie)
}

#[tokio::test]
async fn test_create_task_is_owned_by_user() {
    let app = TestApp::new();
    let (user_id, cookie) = signed_in(&app).await;

    let response = app
        .post_form(
            "/tasks/new",
            "title=CI%2FCD+task&description=Set+up+pipeline&due_date=2030-01-15",
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Task created.");
    assert_eq!(body["data"]["title"], "CI/CD task");
    assert_eq!(body["data"]["due_date"], "2030-01-15");
    assert_eq!(body["data"]["is_completed"], false);

    let stored = app.store.tasks_titled("CI/CD task");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, user_id);
    assert_eq!(stored[0].description.as_deref(), Some("Set up pipeline"));
    assert_eq!(stored[0].due_date, NaiveDate::from_ymd_opt(2030, 1, 15));
}

#[tokio::test]
async fn test_create_task_requires_title() {
    let app = TestApp::new();
    let (_, cookie) = signed_in(&app).await;

    let response = app.post_form("/tasks/new", "title=&description=x", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.store.tasks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_task_rejects_bad_date() {
    let app = TestApp::new();
    let (_, cookie) = signed_in(&app).await;

    let response = app
        .post_form("/tasks/new", "title=Dated&due_date=15%2F01%2F2030", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.store.tasks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_only_shows_own_tasks() {
    let app = TestApp::new();
    let (user_id, cookie) = signed_in(&app).await;
    let other = app.store.insert_user("otheruser", "otherpass");

    seed_task(&app, &user_id, "Mine");
    seed_task(&app, &other.id, "Theirs");

    let response = app.get("/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let tasks = body["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Mine");

    let response = app.get("/tasks", Some(&cookie)).await;
    let body = json_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_task() {
    let app = TestApp::new();
    let (user_id, cookie) = signed_in(&app).await;
    let task = seed_task(&app, &user_id, "Read me");

    let response = app.get(&format!("/tasks/{}", task.id), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["id"], task.id.to_string());
    assert_eq!(body["data"]["title"], "Read me");
}

#[tokio::test]
async fn test_edit_task_fields() {
    let app = TestApp::new();
    let (user_id, cookie) = signed_in(&app).await;
    let task = seed_task(&app, &user_id, "Original");

    let response = app
        .post_form(
            &format!("/tasks/{}/edit", task.id),
            "title=Updated&description=Now+with+detail&due_date=2031-06-01",
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Task updated.");

    let stored = app.store.task(&task.id).unwrap();
    assert_eq!(stored.title, "Updated");
    assert_eq!(stored.description.as_deref(), Some("Now with detail"));
    assert_eq!(stored.due_date, NaiveDate::from_ymd_opt(2031, 6, 1));
    assert_eq!(stored.user_id, user_id);
}

#[tokio::test]
async fn test_edit_with_blank_title_keeps_task() {
    let app = TestApp::new();
    let (user_id, cookie) = signed_in(&app).await;
    let task = seed_task(&app, &user_id, "Original");

    let response = app
        .post_form(&format!("/tasks/{}/edit", task.id), "title=", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.task(&task.id).unwrap().title, "Original");
}

#[tokio::test]
async fn test_toggle_twice_restores_state() {
    let app = TestApp::new();
    let (user_id, cookie) = signed_in(&app).await;
    let task = seed_task(&app, &user_id, "Flip me");
    let uri = format!("/tasks/{}/toggle", task.id);

    let response = app.post_form(&uri, "", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Task status updated.");
    assert!(app.store.task(&task.id).unwrap().is_completed);

    let response = app.post_form(&uri, "", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!app.store.task(&task.id).unwrap().is_completed);
}

#[tokio::test]
async fn test_delete_task() {
    let app = TestApp::new();
    let (user_id, cookie) = signed_in(&app).await;
    let task = seed_task(&app, &user_id, "Doomed");

    let response = app
        .post_form(&format!("/tasks/{}/delete", task.id), "", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Task deleted.");
    assert!(app.store.task(&task.id).is_none());
}

#[tokio::test]
async fn test_foreign_task_is_forbidden() {
    let app = TestApp::new();
    let (_, cookie) = signed_in(&app).await;
    let other = app.store.insert_user("otheruser", "otherpass");
    let task = seed_task(&app, &other.id, "Not yours");

    let response = app.get(&format!("/tasks/{}", task.id), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "AUTHORIZATION_ERROR");

    let response = app
        .post_form(&format!("/tasks/{}/edit", task.id), "title=Hijacked", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .post_form(&format!("/tasks/{}/toggle", task.id), "", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .post_form(&format!("/tasks/{}/delete", task.id), "", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let stored = app.store.task(&task.id).unwrap();
    assert_eq!(stored.title, "Not yours");
    assert!(!stored.is_completed);
}

#[tokio::test]
async fn test_unknown_task_is_not_found() {
    let app = TestApp::new();
    let (_, cookie) = signed_in(&app).await;
    let missing = Uuid::new_v4();

    let response = app.get(&format!("/tasks/{}", missing), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let response = app
        .post_form(&format!("/tasks/{}/toggle", missing), "", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_uuid_task_id_is_not_found() {
    let app = TestApp::new();
    let (_, cookie) = signed_in(&app).await;

    let response = app.post_form("/tasks/42/toggle", "", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let response = app.get("/tasks/not-a-task", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_form_without_content_type_is_validation_error() {
    let app = TestApp::new();
    let (_, cookie) = signed_in(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/tasks/new")
        .header(header::COOKIE, cookie.as_str())
        .body(Body::from("title=Untyped"))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(app.store.tasks_titled("Untyped").is_empty());
}

#[tokio::test]
async fn test_title_with_nul_is_validation_error() {
    let app = TestApp::new();
    let (_, cookie) = signed_in(&app).await;

    let response = app.post_form("/tasks/new", "title=CI%00CD", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(app.store.tasks.lock().unwrap().is_empty());
}
