// src/presentation/http/middleware/mod.rs
mod require_auth;

pub use require_auth::require_bearer;
