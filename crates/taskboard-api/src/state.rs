use std::sync::Arc;

use taskboard_core::repositories::{DatabaseHealth, SessionRepository, TaskRepository, UserRepository};
use taskboard_core::services::{AuthService, TaskService};
use taskboard_security::SessionSigner;
use taskboard_shared::config::SessionSettings;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub tasks: Arc<TaskService>,
    pub health: Arc<dyn DatabaseHealth>,
    pub signer: SessionSigner,
    pub cookie: CookieSettings,
}

#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub max_age_seconds: i64,
    pub secure: bool,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tasks: Arc<dyn TaskRepository>,
        sessions: Arc<dyn SessionRepository>,
        health: Arc<dyn DatabaseHealth>,
        session: &SessionSettings,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(users, sessions, session.ttl_seconds)),
            tasks: Arc::new(TaskService::new(tasks)),
            health,
            signer: SessionSigner::new(&session.secret_key),
            cookie: CookieSettings {
                max_age_seconds: session.ttl_seconds,
                secure: session.cookie_secure,
            },
        }
    }
}
