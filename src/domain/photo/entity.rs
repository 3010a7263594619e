// src/domain/photo/entity.rs
use crate::domain::photo::value_objects::{PhotoId, PhotoTitle, PhotoUrl};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Photo {
    pub id: PhotoId,
    pub title: Option<PhotoTitle>,
    pub caption: Option<String>,
    pub url: PhotoUrl,
    pub owner_id: UserId,
    pub is_profile: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Photo {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub title: Option<PhotoTitle>,
    pub caption: Option<String>,
    pub url: PhotoUrl,
    pub owner_id: UserId,
    pub is_profile: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPhoto {
    /// An ordinary upload. Never a profile photo.
    pub fn upload(
        owner_id: UserId,
        url: PhotoUrl,
        title: Option<PhotoTitle>,
        caption: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            caption,
            url,
            owner_id,
            is_profile: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn profile(owner_id: UserId, url: PhotoUrl, now: DateTime<Utc>) -> Self {
        Self {
            title: None,
            caption: None,
            url,
            owner_id,
            is_profile: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a stored photo. The profile flag is deliberately absent:
/// it only changes through [`NewPhoto::profile`] and
/// `PhotoRepository::clear_profile_flags`.
#[derive(Debug, Clone)]
pub struct PhotoUpdate {
    pub id: PhotoId,
    pub title: Option<PhotoTitle>,
    pub caption: Option<String>,
    pub url: Option<PhotoUrl>,
    pub updated_at: DateTime<Utc>,
}

impl PhotoUpdate {
    pub fn new(id: PhotoId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            caption: None,
            url: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PhotoTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_caption(mut self, caption: String) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn with_url(mut self, url: PhotoUrl) -> Self {
        self.url = Some(url);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.caption.is_none() && self.url.is_none()
    }
}

/// Orders profile rows so the first element is the one that survives a
/// repair: oldest `created_at`, then lowest id.
pub fn sort_oldest_first(photos: &mut [Photo]) {
    photos.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}
