//! Database connection URI assembly.
//!
//! `DATABASE_URL` wins when present. Otherwise the five `POSTGRES_*`
//! variables are combined into a SQLAlchemy-style URI, which the
//! infrastructure layer normalizes before connecting.

use crate::error::AppError;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const POSTGRES_USER_VAR: &str = "POSTGRES_USER";
pub const POSTGRES_PASSWORD_VAR: &str = "POSTGRES_PASSWORD";
pub const POSTGRES_HOST_VAR: &str = "POSTGRES_HOST";
pub const POSTGRES_PORT_VAR: &str = "POSTGRES_PORT";
pub const POSTGRES_DB_VAR: &str = "POSTGRES_DB";

/// Scheme emitted by [`build_postgres_uri`].
pub const POSTGRES_SCHEME: &str = "postgresql+psycopg2";

/// Build `postgresql+psycopg2://{user}:{password}@{host}:{port}/{database}`
/// from the `POSTGRES_*` variables returned by `lookup`.
///
/// Blank values count as missing.
pub fn build_postgres_uri<F>(lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let user = require(&lookup, POSTGRES_USER_VAR)?;
    let password = require(&lookup, POSTGRES_PASSWORD_VAR)?;
    let host = require(&lookup, POSTGRES_HOST_VAR)?;
    let port = require(&lookup, POSTGRES_PORT_VAR)?;
    let database = require(&lookup, POSTGRES_DB_VAR)?;

    Ok(format!(
        "{}://{}:{}@{}:{}/{}",
        POSTGRES_SCHEME, user, password, host, port, database
    ))
}

/// [`build_postgres_uri`] over the process environment.
pub fn build_postgres_uri_from_env() -> Result<String, AppError> {
    build_postgres_uri(|key| std::env::var(key).ok())
}

/// `DATABASE_URL` if set, otherwise the URI assembled from `POSTGRES_*`.
pub fn resolve_database_url<F>(lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_blank(lookup(DATABASE_URL_VAR)) {
        Some(url) => Ok(url),
        None => build_postgres_uri(lookup),
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    non_blank(lookup(key)).ok_or_else(|| AppError::MissingConfig(key.to_string()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
