// src/presentation/http/controllers/mod.rs
pub mod photos;
pub mod profile_photo;
pub mod users;
