// src/presentation/http/controllers/profile_photo.rs
use crate::application::{
    commands::photos::SetProfilePhotoCommand,
    dto::{PhotoDto, ProfilePhotoDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetProfilePhotoRequest {
    pub photo_url: String,
}

#[utoipa::path(
    get,
    path = "/api/profile-photo",
    responses(
        (status = 200, description = "The caller's profile photo.", body = ProfilePhotoDto),
        (status = 404, description = "No profile photo set.", body = ErrorResponse),
        (status = 500, description = "More than one profile photo stored.", body = ErrorResponse)
    ),
    tag = "Profile photo"
)]
pub async fn get_profile_photo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ProfilePhotoDto>> {
    state
        .services
        .photo_queries
        .get_profile_photo(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/profile-photo",
    request_body = SetProfilePhotoRequest,
    responses(
        (status = 200, description = "Existing profile photo re-pointed.", body = PhotoDto),
        (status = 201, description = "Profile photo created.", body = PhotoDto),
        (status = 400, description = "Invalid URL.", body = ErrorResponse)
    ),
    tag = "Profile photo"
)]
pub async fn set_profile_photo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SetProfilePhotoRequest>,
) -> HttpResult<(StatusCode, Json<PhotoDto>)> {
    let outcome = state
        .services
        .photo_commands
        .set_profile_photo(
            &user,
            SetProfilePhotoCommand {
                photo_url: payload.photo_url,
            },
        )
        .await
        .into_http()?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.photo)))
}
