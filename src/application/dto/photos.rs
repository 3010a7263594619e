use crate::domain::photo::Photo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoDto {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub photo_url: String,
    pub user_id: i64,
    pub is_profile: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Photo> for PhotoDto {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id.into(),
            title: photo.title.map(String::from),
            caption: photo.caption,
            photo_url: photo.url.into(),
            user_id: photo.owner_id.into(),
            is_profile: photo.is_profile,
            created_at: photo.created_at,
            updated_at: photo.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfilePhotoDto {
    pub photo_id: i64,
    pub photo_url: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Photo> for ProfilePhotoDto {
    fn from(photo: Photo) -> Self {
        Self {
            photo_id: photo.id.into(),
            photo_url: photo.url.into(),
            updated_at: photo.updated_at,
        }
    }
}
