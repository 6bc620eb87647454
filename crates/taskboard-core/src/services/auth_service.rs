// ============================================================================
// Taskboard Core - Authentication Service
// File: crates/taskboard-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service with register, login, session lookup and logout

use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn, error};
use uuid::Uuid;

use taskboard_security::{PasswordService, Session};

use crate::domain::User;
use crate::error::DomainError;
use crate::repositories::{SessionRepository, UserRepository};

/// Authentication service for handling user register/login flows
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    session_ttl_seconds: i64,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        session_ttl_seconds: i64,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            session_ttl_seconds,
        }
    }

    /// Register a new user
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<User, DomainError> {
        let username = username.trim();
        info!("Registration attempt for username: {}", username);

        if password.is_empty() {
            return Err(DomainError::ValidationError("Password is required".to_string()));
        }
        if password != confirm {
            return Err(DomainError::ValidationError("Passwords do not match".to_string()));
        }

        let mut user = User::new(username)?;

        if self.user_repo.find_by_username(&user.username).await?.is_some() {
            warn!("Registration failed: username already exists: {}", user.username);
            return Err(DomainError::UsernameAlreadyExists(user.username));
        }

        user.set_password(password)?;

        let created = self.user_repo.create(&user).await?;
        info!("Registration successful for: {}", created.username);
        Ok(created)
    }

    /// Login with username and password. Unknown usernames and wrong
    /// passwords both yield `InvalidCredentials`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, DomainError> {
        let username = username.trim();
        info!("Login attempt for username: {}", username);

        // No stored username can contain NUL
        let found = if username.contains('\0') {
            None
        } else {
            self.user_repo.find_by_username(username).await?
        };

        let user = match found {
            Some(user) => user,
            None => {
                PasswordService::verify_dummy(password);
                warn!("Login failed for: {}", username);
                return Err(DomainError::InvalidCredentials);
            }
        };

        if !user.check_password(password) {
            warn!("Login failed for: {}", username);
            return Err(DomainError::InvalidCredentials);
        }

        if let Err(e) = self.session_repo.delete_expired(Utc::now()).await {
            // Stale rows are rejected on read anyway
            error!("Failed to purge expired sessions: {}", e);
        }

        let session = Session::new(user.id, self.session_ttl_seconds);
        self.session_repo.create(&session).await?;

        info!("Login successful for: {}", username);
        Ok(LoginResult { user, session })
    }

    /// Owning user id of a live session. Expired sessions are removed.
    pub async fn resolve_session(&self, session_id: &Uuid) -> Result<Option<Uuid>, DomainError> {
        let session = match self.session_repo.find_by_id(session_id).await? {
            Some(session) => session,
            None => return Ok(None),
        };

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Ok(None);
        }

        Ok(Some(session.user_id))
    }

    /// Idempotent
    pub async fn logout(&self, session_id: &Uuid) -> Result<(), DomainError> {
        self.session_repo.delete(session_id).await?;
        info!("Session ended");
        Ok(())
    }
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub session: Session,
}
