//! Session repository trait (port)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use taskboard_security::Session;
use uuid::Uuid;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &Session) -> Result<(), DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Session>, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
    /// Returns the number of sessions removed.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;
}
