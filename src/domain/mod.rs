// src/domain/mod.rs
pub mod errors;
pub mod photo;
pub mod user;
