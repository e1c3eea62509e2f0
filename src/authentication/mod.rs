mod middleware;
mod password;
pub use middleware::{reject_invalid_sessions, require_superuser, UserId};
pub use password::{compute_password_hash, validate_credentials, AuthError, Credentials};
