use super::PhotoCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PhotoDto},
        error::ApplicationResult,
    },
    domain::photo::{NewPhoto, PhotoTitle, PhotoUrl},
};

pub struct CreatePhotoCommand {
    pub title: Option<String>,
    pub caption: Option<String>,
    pub photo_url: String,
}

impl PhotoCommandService {
    pub async fn create_photo(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePhotoCommand,
    ) -> ApplicationResult<PhotoDto> {
        let url = PhotoUrl::new(command.photo_url)?;
        let title = command.title.map(PhotoTitle::new).transpose()?;
        let caption = command.caption.filter(|c| !c.trim().is_empty());

        let new_photo = NewPhoto::upload(actor.id, url, title, caption, self.clock.now());
        let photo = self.photo_repo.insert(new_photo).await?;
        tracing::debug!(photo_id = %photo.id, owner = %actor.id, "photo created");

        Ok(photo.into())
    }
}
