mod me;
mod service;

pub use service::UserQueryService;
