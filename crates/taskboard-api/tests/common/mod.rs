#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use taskboard_api::{router, AppState};
use taskboard_core::domain::{Task, User};
use taskboard_core::error::DomainError;
use taskboard_core::repositories::{DatabaseHealth, SessionRepository, TaskRepository, UserRepository};
use taskboard_security::Session;
use taskboard_shared::config::SessionSettings;

/// In-memory stand-in for the PostgreSQL tables.
#[derive(Default)]
pub struct MemoryStore {
    pub users: Mutex<HashMap<Uuid, User>>,
    pub tasks: Mutex<HashMap<Uuid, Task>>,
    pub sessions: Mutex<HashMap<Uuid, Session>>,
}

impl MemoryStore {
    pub fn user_by_name(&self, username: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    pub fn tasks_titled(&self, title: &str) -> Vec<Task> {
        self.tasks
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.title == title)
            .cloned()
            .collect()
    }

    pub fn task(&self, id: &Uuid) -> Option<Task> {
        self.tasks.lock().unwrap().get(id).cloned()
    }

    pub fn insert_user(&self, username: &str, password: &str) -> User {
        let mut user = User::new(username).unwrap();
        user.set_password(password).unwrap();
        self.users.lock().unwrap().insert(user.id, user.clone());
        user
    }

    pub fn insert_task(&self, task: Task) -> Task {
        self.tasks.lock().unwrap().insert(task.id, task.clone());
        task
    }
}

pub struct MemoryUsers(pub Arc<MemoryStore>);
pub struct MemoryTasks(pub Arc<MemoryStore>);
pub struct MemorySessions(pub Arc<MemoryStore>);
pub struct AlwaysHealthy;

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self.0.user_by_name(username))
    }

    async fn create(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.0.users.lock().unwrap();
        if users.values().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists(user.username.clone()));
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }
}

#[async_trait]
impl TaskRepository for MemoryTasks {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Task>, DomainError> {
        Ok(self.0.task(id))
    }

    async fn list_by_owner(&self, user_id: &Uuid) -> Result<Vec<Task>, DomainError> {
        let mut tasks: Vec<Task> = self
            .0
            .tasks
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.user_id == *user_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| (t.is_completed, t.due_date.is_none(), t.due_date, t.created_at));
        Ok(tasks)
    }

    async fn create(&self, task: &Task) -> Result<Task, DomainError> {
        Ok(self.0.insert_task(task.clone()))
    }

    async fn update(&self, task: &Task) -> Result<Option<Task>, DomainError> {
        let mut tasks = self.0.tasks.lock().unwrap();
        match tasks.get_mut(&task.id) {
            Some(stored) if stored.user_id == task.user_id => {
                stored.title = task.title.clone();
                stored.description = task.description.clone();
                stored.due_date = task.due_date;
                stored.updated_at = task.updated_at;
                Ok(Some(stored.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn toggle_completion(&self, id: &Uuid, user_id: &Uuid) -> Result<Option<Task>, DomainError> {
        let mut tasks = self.0.tasks.lock().unwrap();
        match tasks.get_mut(id) {
            Some(stored) if stored.user_id == *user_id => {
                stored.toggle();
                Ok(Some(stored.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: &Uuid, user_id: &Uuid) -> Result<bool, DomainError> {
        let mut tasks = self.0.tasks.lock().unwrap();
        match tasks.get(id) {
            Some(stored) if stored.user_id == *user_id => Ok(tasks.remove(id).is_some()),
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl SessionRepository for MemorySessions {
    async fn create(&self, session: &Session) -> Result<(), DomainError> {
        self.0.sessions.lock().unwrap().insert(session.id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Session>, DomainError> {
        Ok(self.0.sessions.lock().unwrap().get(id).cloned())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.0.sessions.lock().unwrap().remove(id);
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut sessions = self.0.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        Ok((before - sessions.len()) as u64)
    }
}

#[async_trait]
impl DatabaseHealth for AlwaysHealthy {
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

pub const SECRET_KEY: &str = "test";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let settings = SessionSettings {
            secret_key: SECRET_KEY.to_string(),
            ttl_seconds: 3600,
            cookie_secure: false,
        };
        let state = AppState::new(
            Arc::new(MemoryUsers(store.clone())),
            Arc::new(MemoryTasks(store.clone())),
            Arc::new(MemorySessions(store.clone())),
            Arc::new(AlwaysHealthy),
            &settings,
        );
        Self {
            router: router(state),
            store,
        }
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Log in and return the `name=value` pair to send back as `Cookie`.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post_form("/login", &format!("username={}&password={}", username, password), None)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        session_cookie_pair(&response).expect("login should set a session cookie")
    }
}

pub fn session_cookie_pair(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|pair| pair.to_string())
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
