use super::PhotoCommandService;
use crate::{
    application::{
        authorization::ensure_owner,
        dto::{AuthenticatedUser, PhotoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::photo::{PhotoId, PhotoTitle, PhotoUpdate, PhotoUrl},
};

pub struct UpdatePhotoCommand {
    pub id: i64,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub photo_url: Option<String>,
}

impl PhotoCommandService {
    pub async fn update_photo(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePhotoCommand,
    ) -> ApplicationResult<PhotoDto> {
        let id = PhotoId::new(command.id)?;
        let photo = self
            .photo_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("photo not found"))?;
        ensure_owner(actor, photo.owner_id, "photo")?;

        let mut update = PhotoUpdate::new(id, self.clock.now());
        if let Some(title) = command.title {
            update = update.with_title(PhotoTitle::new(title)?);
        }
        if let Some(caption) = command.caption {
            update = update.with_caption(caption);
        }
        if let Some(url) = command.photo_url {
            update = update.with_url(PhotoUrl::new(url)?);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let updated = self.photo_repo.update(update).await?;
        Ok(updated.into())
    }
}
