use super::PhotoCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PhotoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        photo::{NewPhoto, Photo, PhotoId, PhotoUpdate, PhotoUrl, entity::sort_oldest_first},
        user::UserId,
    },
};
use chrono::{DateTime, Utc};

pub struct SetProfilePhotoCommand {
    pub photo_url: String,
}

#[derive(Debug)]
pub struct ProfilePhotoOutcome {
    pub photo: PhotoDto,
    pub created: bool,
}

impl PhotoCommandService {
    /// Points the caller's profile photo at `photo_url`: updates the existing
    /// profile row in place (id and `created_at` kept) or creates one when
    /// none exists. Runs under the caller's owner lock so concurrent calls
    /// cannot both observe an empty state.
    pub async fn set_profile_photo(
        &self,
        actor: &AuthenticatedUser,
        command: SetProfilePhotoCommand,
    ) -> ApplicationResult<ProfilePhotoOutcome> {
        let url = PhotoUrl::new(command.photo_url)?;
        let owner = actor.id;
        let _guard = self.owner_locks.lock(owner).await;

        match self.assign_profile_photo(owner, url.clone()).await {
            // Another process inserted between our read and our insert; the
            // storage uniqueness index turned it into a conflict.
            Err(ApplicationError::Domain(err)) if err.is_conflict() => {
                tracing::warn!(owner = %owner, "profile photo insert raced, retrying as update");
                self.assign_profile_photo(owner, url)
                    .await
                    .map_err(|err| match err {
                        ApplicationError::Domain(inner) if inner.is_conflict() => {
                            tracing::error!(owner = %owner, "profile photo conflict persisted after retry");
                            ApplicationError::invariant_violation(
                                "profile photo could not be assigned without duplicating it",
                            )
                        }
                        other => other,
                    })
            }
            other => other,
        }
    }

    async fn assign_profile_photo(
        &self,
        owner: UserId,
        url: PhotoUrl,
    ) -> ApplicationResult<ProfilePhotoOutcome> {
        let mut current = self.photo_repo.find_profile_photos(owner).await?;
        sort_oldest_first(&mut current);
        let now = self.clock.now();

        let Some(keep) = current.first().map(|photo| photo.id) else {
            let created = self
                .photo_repo
                .insert(NewPhoto::profile(owner, url, now))
                .await?;
            tracing::info!(owner = %owner, photo_id = %created.id, "profile photo created");
            return Ok(ProfilePhotoOutcome {
                photo: created.into(),
                created: true,
            });
        };

        if current.len() > 1 {
            self.collapse_profile_photos(owner, keep, &current, now)
                .await?;
        }

        let updated = self
            .photo_repo
            .update(PhotoUpdate::new(keep, now).with_url(url))
            .await?;
        tracing::info!(owner = %owner, photo_id = %updated.id, "profile photo updated");

        Ok(ProfilePhotoOutcome {
            photo: updated.into(),
            created: false,
        })
    }

    /// Repairs an owner that somehow ended up with several profile rows: the
    /// oldest keeps the flag, the rest become ordinary photos.
    async fn collapse_profile_photos(
        &self,
        owner: UserId,
        keep: PhotoId,
        rows: &[Photo],
        now: DateTime<Utc>,
    ) -> ApplicationResult<()> {
        let demoted: Vec<i64> = rows
            .iter()
            .filter(|photo| photo.id != keep)
            .map(|photo| i64::from(photo.id))
            .collect();
        tracing::error!(
            owner = %owner,
            kept = %keep,
            demoted = ?demoted,
            "multiple profile photos found; collapsing to one"
        );

        let cleared = self
            .photo_repo
            .clear_profile_flags(owner, keep, now)
            .await?;
        if cleared != demoted.len() as u64 {
            tracing::warn!(
                owner = %owner,
                expected = demoted.len(),
                cleared,
                "profile photo repair touched an unexpected number of rows"
            );
        }
        Ok(())
    }
}
