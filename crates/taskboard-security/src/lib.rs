//! # Taskboard Security
//! 
//! Security utilities: password hashing, server-side sessions, cookie signing.

pub mod password;
pub mod session;
pub mod signer;

pub use password::{PasswordError, PasswordService};
pub use session::Session;
pub use signer::{SessionSigner, SignatureError};
