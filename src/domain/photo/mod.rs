// src/domain/photo/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPhoto, Photo, PhotoUpdate};
pub use repository::PhotoRepository;
pub use value_objects::{PhotoId, PhotoTitle, PhotoUrl};
