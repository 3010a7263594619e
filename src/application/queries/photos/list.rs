use super::PhotoQueryService;
use crate::application::{
    dto::{AuthenticatedUser, PhotoDto},
    error::ApplicationResult,
};

impl PhotoQueryService {
    pub async fn list_photos(&self) -> ApplicationResult<Vec<PhotoDto>> {
        let photos = self.photo_repo.list_all().await?;
        Ok(photos.into_iter().map(PhotoDto::from).collect())
    }

    pub async fn list_my_photos(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<PhotoDto>> {
        let photos = self.photo_repo.list_by_owner(actor.id).await?;
        Ok(photos.into_iter().map(PhotoDto::from).collect())
    }
}
