use super::PhotoQueryService;
use crate::{
    application::{
        dto::PhotoDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::photo::PhotoId,
};

impl PhotoQueryService {
    pub async fn get_photo(&self, id: i64) -> ApplicationResult<PhotoDto> {
        let id = PhotoId::new(id)?;
        self.photo_repo
            .find_by_id(id)
            .await?
            .map(PhotoDto::from)
            .ok_or_else(|| ApplicationError::not_found("photo not found"))
    }
}
