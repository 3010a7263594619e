use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        authorization::ensure_owner,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, PasswordHash, UserId, UserUpdate, Username},
};

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let user_id = UserId::new(command.user_id)?;
        ensure_owner(actor, user_id, "account")?;

        let mut update = UserUpdate::new(user_id, self.clock.now());

        if let Some(username) = command.username {
            update = update.with_username(Username::new(username)?);
        }

        if let Some(email) = command.email {
            let email = Email::new(email)?;
            self.ensure_email_free_for(user_id, &email).await?;
            update = update.with_email(email);
        }

        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }

    async fn ensure_email_free_for(&self, user_id: UserId, email: &Email) -> ApplicationResult<()> {
        match self.user_repo.find_by_email(email).await? {
            Some(existing) if existing.id != user_id => {
                Err(ApplicationError::conflict("email already registered"))
            }
            _ => Ok(()),
        }
    }
}
