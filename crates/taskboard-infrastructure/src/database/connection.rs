//! Database connection pool

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::error;

use taskboard_core::error::DomainError;
use taskboard_core::repositories::DatabaseHealth;

pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&normalize_driver_scheme(url))
        .await
}

/// Strip a `+driver` suffix from the scheme: `postgresql+psycopg2://` is
/// accepted as `postgresql://`.
pub fn normalize_driver_scheme(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => match scheme.split_once('+') {
            Some((base, _driver)) => format!("{}://{}", base, rest),
            None => url.to_string(),
        },
        None => url.to_string(),
    }
}

/// Apply embedded migrations; safe to run on every start.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("apply database migrations")?;
    Ok(())
}

pub struct PgDatabaseHealth {
    pool: PgPool,
}

impl PgDatabaseHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseHealth for PgDatabaseHealth {
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e: sqlx::Error| {
                error!("Database health check failed: {}", e);
                DomainError::DatabaseError(e.to_string())
            })
    }
}
