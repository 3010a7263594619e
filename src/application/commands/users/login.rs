use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

const INVALID_CREDENTIALS: &str = "invalid email or password";

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        // A malformed email cannot belong to anyone; answer like any other miss.
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;
        let user = self
            .find_and_authenticate_user(&email, &command.password)
            .await?;

        let token = self.token_manager.issue(user.id).await?;
        tracing::info!(user_id = %user.id, "login succeeded");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            tracing::debug!("login rejected: unknown email");
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await
        {
            tracing::debug!(user_id = %user.id, "login rejected: password mismatch");
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        }

        Ok(user)
    }
}
