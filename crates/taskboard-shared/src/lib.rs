//! # Taskboard Shared
//! 
//! Configuration, database URI assembly, telemetry, and shared types.

pub mod constants;
pub mod types;
pub mod database_uri;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
pub use database_uri::{build_postgres_uri, build_postgres_uri_from_env, resolve_database_url};
