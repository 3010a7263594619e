// src/domain/photo/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::photo::{
    entity::{NewPhoto, Photo, PhotoUpdate},
    value_objects::PhotoId,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Inserting a second profile photo for the same owner must fail with
    /// `DomainError::Conflict`.
    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo>;

    async fn update(&self, update: PhotoUpdate) -> DomainResult<Photo>;

    async fn delete(&self, id: PhotoId) -> DomainResult<()>;

    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>>;

    async fn list_all(&self) -> DomainResult<Vec<Photo>>;

    async fn list_by_owner(&self, owner: UserId) -> DomainResult<Vec<Photo>>;

    /// All rows of `owner` flagged as profile photo, oldest first.
    async fn find_profile_photos(&self, owner: UserId) -> DomainResult<Vec<Photo>>;

    /// Clears the profile flag on every profile row of `owner` except `keep`.
    /// Returns the number of rows changed.
    async fn clear_profile_flags(
        &self,
        owner: UserId,
        keep: PhotoId,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64>;
}
