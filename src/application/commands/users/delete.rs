use super::UserCommandService;
use crate::{
    application::{authorization::ensure_owner, dto::AuthenticatedUser, error::ApplicationResult},
    domain::user::UserId,
};

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        let user_id = UserId::new(command.user_id)?;
        ensure_owner(actor, user_id, "account")?;

        self.user_repo.delete(user_id).await?;
        tracing::info!(user_id = %user_id, "user deleted");
        Ok(())
    }
}
