// src/infrastructure/repositories/postgres_photo.rs
use super::{invalid_row, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::photo::{
    NewPhoto, Photo, PhotoId, PhotoRepository, PhotoTitle, PhotoUpdate, PhotoUrl,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PHOTO_COLUMNS: &str =
    "id, title, caption, url, user_id, is_profile, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPhotoRepository {
    pool: PgPool,
}

impl PostgresPhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, sql: &str, owner: Option<UserId>) -> DomainResult<Vec<Photo>> {
        let mut query = sqlx::query_as::<_, PhotoRow>(sql);
        if let Some(owner) = owner {
            query = query.bind(i64::from(owner));
        }
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx)?;
        rows.into_iter().map(Photo::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct PhotoRow {
    id: i64,
    title: Option<String>,
    caption: Option<String>,
    url: String,
    user_id: i64,
    is_profile: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PhotoRow> for Photo {
    type Error = DomainError;

    fn try_from(row: PhotoRow) -> Result<Self, Self::Error> {
        Ok(Photo {
            id: PhotoId::new(row.id).map_err(invalid_row)?,
            title: row
                .title
                .map(PhotoTitle::new)
                .transpose()
                .map_err(invalid_row)?,
            caption: row.caption,
            url: PhotoUrl::new(row.url).map_err(invalid_row)?,
            owner_id: UserId::new(row.user_id).map_err(invalid_row)?,
            is_profile: row.is_profile,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PhotoRepository for PostgresPhotoRepository {
    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo> {
        let NewPhoto {
            title,
            caption,
            url,
            owner_id,
            is_profile,
            created_at,
            updated_at,
        } = photo;

        let row = sqlx::query_as::<_, PhotoRow>(&format!(
            "INSERT INTO photos (title, caption, url, user_id, is_profile, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {PHOTO_COLUMNS}"
        ))
        .bind(title.map(String::from))
        .bind(caption)
        .bind(String::from(url))
        .bind(i64::from(owner_id))
        .bind(is_profile)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Photo::try_from(row)
    }

    async fn update(&self, update: PhotoUpdate) -> DomainResult<Photo> {
        let PhotoUpdate {
            id,
            title,
            caption,
            url,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE photos SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }

        if let Some(caption) = caption {
            builder.push(", caption = ");
            builder.push_bind(caption);
        }

        if let Some(url) = url {
            builder.push(", url = ");
            builder.push_bind(String::from(url));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(PHOTO_COLUMNS);

        let row = builder
            .build_query_as::<PhotoRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("photo not found".into()))?;

        Photo::try_from(row)
    }

    async fn delete(&self, id: PhotoId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("photo not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>> {
        let row = sqlx::query_as::<_, PhotoRow>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photos WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Photo::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Photo>> {
        self.fetch_many(
            &format!("SELECT {PHOTO_COLUMNS} FROM photos ORDER BY created_at DESC, id DESC"),
            None,
        )
        .await
    }

    async fn list_by_owner(&self, owner: UserId) -> DomainResult<Vec<Photo>> {
        self.fetch_many(
            &format!(
                "SELECT {PHOTO_COLUMNS} FROM photos WHERE user_id = $1 \
                 ORDER BY created_at DESC, id DESC"
            ),
            Some(owner),
        )
        .await
    }

    async fn find_profile_photos(&self, owner: UserId) -> DomainResult<Vec<Photo>> {
        self.fetch_many(
            &format!(
                "SELECT {PHOTO_COLUMNS} FROM photos WHERE user_id = $1 AND is_profile \
                 ORDER BY created_at ASC, id ASC"
            ),
            Some(owner),
        )
        .await
    }

    async fn clear_profile_flags(
        &self,
        owner: UserId,
        keep: PhotoId,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let result = sqlx::query(
            "UPDATE photos SET is_profile = FALSE, updated_at = $3
             WHERE user_id = $1 AND is_profile AND id <> $2",
        )
        .bind(i64::from(owner))
        .bind(i64::from(keep))
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}
