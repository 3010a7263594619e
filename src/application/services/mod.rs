// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{photos::PhotoCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        error::AuthError,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{photos::PhotoQueryService, users::UserQueryService},
    },
    domain::{photo::PhotoRepository, user::UserRepository},
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub photo_commands: Arc<PhotoCommandService>,
    pub photo_queries: Arc<PhotoQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        photo_repo: Arc<dyn PhotoRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let photo_commands = Arc::new(PhotoCommandService::new(
            Arc::clone(&photo_repo),
            Arc::clone(&clock),
        ));
        let photo_queries = Arc::new(PhotoQueryService::new(Arc::clone(&photo_repo)));

        Self {
            user_commands,
            user_queries,
            photo_commands,
            photo_queries,
            token_manager,
        }
    }

    /// Validate a raw bearer token and produce the request's authorization
    /// context.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let result = self.token_manager.authenticate(token).await;
        if let Err(err) = &result {
            tracing::debug!(reason = err.as_str(), "bearer token rejected");
        }
        result
    }
}
