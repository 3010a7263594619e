mod create;
mod delete;
mod locks;
mod profile;
mod service;
mod update;

pub use create::CreatePhotoCommand;
pub use delete::DeletePhotoCommand;
pub use profile::{ProfilePhotoOutcome, SetProfilePhotoCommand};
pub use service::PhotoCommandService;
pub use update::UpdatePhotoCommand;
