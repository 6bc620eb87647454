//! User repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::domain::User;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Exact, case-sensitive match.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    /// Fails with `UsernameAlreadyExists` on a uniqueness conflict.
    async fn create(&self, user: &User) -> Result<User, DomainError>;
}
