pub mod auth;
pub mod photos;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser};
pub use photos::{PhotoDto, ProfilePhotoDto};
pub use users::UserDto;
