//! User domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use taskboard_security::password::{PasswordError, PasswordService};

use super::no_nul_bytes;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: Uuid,

    #[validate(
        length(min = 1, max = 80, message = "Username must be between 1 and 80 characters"),
        custom(function = "no_nul_bytes")
    )]
    pub username: String,

    /// Argon2 PHC string; empty until a password is set.
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user without credentials. Usernames are case-sensitive and
    /// only surrounding whitespace is trimmed.
    pub fn new(username: &str) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            id: taskboard_shared::new_id(),
            username: username.trim().to_string(),
            password_hash: String::new(),
            created_at: Utc::now(),
        };

        user.validate()?;
        Ok(user)
    }

    pub fn set_password(&mut self, plaintext: &str) -> Result<(), PasswordError> {
        self.password_hash = PasswordService::hash(plaintext)?;
        Ok(())
    }

    /// False for any mismatch, including a missing or malformed stored hash.
    pub fn check_password(&self, candidate: &str) -> bool {
        if self.password_hash.is_empty() {
            return false;
        }
        PasswordService::verify(candidate, &self.password_hash).unwrap_or(false)
    }
}
