//! Application-wide constants

pub const SESSION_COOKIE_NAME: &str = "taskboard_session";
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 86_400;
pub const MAX_SESSION_TTL_SECONDS: i64 = 31_536_000;
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const LOGIN_ROUTE: &str = "/login";
