// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_photo;
mod postgres_user;

pub use error::{invalid_row, map_sqlx};
pub use postgres_photo::PostgresPhotoRepository;
pub use postgres_user::PostgresUserRepository;
