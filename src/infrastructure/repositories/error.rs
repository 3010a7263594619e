use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_PHOTO_OWNER: &str = "photos_user_id_fkey";
const CNT_PHOTO_ONE_PROFILE: &str = "photos_one_profile_per_user";

/// A stored row that no longer passes domain validation is a storage fault,
/// not a client error.
pub fn invalid_row(err: DomainError) -> DomainError {
    match err {
        DomainError::Persistence(_) => err,
        other => DomainError::Persistence(format!("stored row failed validation: {other}")),
    }
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_PHOTO_OWNER => DomainError::NotFound("photo owner not found".into()),
                    CNT_PHOTO_ONE_PROFILE => {
                        DomainError::Conflict("user already has a profile photo".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
