mod get;
mod list;
mod profile;
mod service;

pub use service::PhotoQueryService;
