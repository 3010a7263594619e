use super::PhotoQueryService;
use crate::application::{
    dto::{AuthenticatedUser, ProfilePhotoDto},
    error::{ApplicationError, ApplicationResult},
};

impl PhotoQueryService {
    /// The caller's single profile photo. More than one row is a data
    /// integrity fault and is reported, not resolved, on this read path.
    pub async fn get_profile_photo(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<ProfilePhotoDto> {
        let rows = self.photo_repo.find_profile_photos(actor.id).await?;
        let count = rows.len();
        let mut rows = rows.into_iter();

        match (rows.next(), rows.next()) {
            (None, _) => Err(ApplicationError::not_found("profile photo not set")),
            (Some(photo), None) => Ok(photo.into()),
            (Some(_), Some(_)) => {
                tracing::error!(owner = %actor.id, count, "multiple profile photos found on read");
                Err(ApplicationError::invariant_violation(format!(
                    "user {} has {count} profile photos",
                    actor.id
                )))
            }
        }
    }
}
