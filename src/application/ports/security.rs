// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser},
    error::AuthError,
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// `false` on mismatch and on an unparseable stored hash.
    async fn verify(&self, password: &str, expected_hash: &str) -> bool;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: UserId) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
