use super::PhotoCommandService;
use crate::{
    application::{
        authorization::ensure_owner,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::photo::PhotoId,
};

pub struct DeletePhotoCommand {
    pub id: i64,
}

impl PhotoCommandService {
    /// Deleting the current profile photo leaves the owner without one; no
    /// other photo is promoted.
    pub async fn delete_photo(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePhotoCommand,
    ) -> ApplicationResult<()> {
        let id = PhotoId::new(command.id)?;
        let photo = self
            .photo_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("photo not found"))?;
        ensure_owner(actor, photo.owner_id, "photo")?;

        let _guard = self.owner_locks.lock(photo.owner_id).await;
        self.photo_repo.delete(id).await?;
        tracing::debug!(
            photo_id = %id,
            owner = %photo.owner_id,
            was_profile = photo.is_profile,
            "photo deleted"
        );
        Ok(())
    }
}
