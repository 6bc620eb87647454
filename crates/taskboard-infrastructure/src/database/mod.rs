//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;

pub use connection::{create_pool, normalize_driver_scheme, run_migrations, PgDatabaseHealth};
pub use postgres::{PgSessionRepository, PgTaskRepository, PgUserRepository};
