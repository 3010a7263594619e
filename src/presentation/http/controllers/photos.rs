// src/presentation/http/controllers/photos.rs
use crate::application::{
    commands::photos::{CreatePhotoCommand, DeletePhotoCommand, UpdatePhotoCommand},
    dto::PhotoDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePhotoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    pub photo_url: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePhotoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[utoipa::path(
    get,
    path = "/photos",
    responses((status = 200, description = "All photos, newest first.", body = [PhotoDto])),
    security(()),
    tag = "Photos"
)]
pub async fn list_photos(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<PhotoDto>>> {
    state
        .services
        .photo_queries
        .list_photos()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/photos/mine",
    responses((status = 200, description = "Photos owned by the caller.", body = [PhotoDto])),
    tag = "Photos"
)]
pub async fn list_my_photos(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<PhotoDto>>> {
    state
        .services
        .photo_queries
        .list_my_photos(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/photos",
    request_body = CreatePhotoRequest,
    responses(
        (status = 201, description = "Photo created.", body = PhotoDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse)
    ),
    tag = "Photos"
)]
pub async fn create_photo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePhotoRequest>,
) -> HttpResult<(StatusCode, Json<PhotoDto>)> {
    let command = CreatePhotoCommand {
        title: payload.title,
        caption: payload.caption,
        photo_url: payload.photo_url,
    };

    let photo = state
        .services
        .photo_commands
        .create_photo(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(photo)))
}

#[utoipa::path(
    get,
    path = "/api/photos/{id}",
    params(("id" = i64, Path, description = "Photo id")),
    responses(
        (status = 200, description = "Photo.", body = PhotoDto),
        (status = 404, description = "No such photo.", body = ErrorResponse)
    ),
    tag = "Photos"
)]
pub async fn get_photo(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<PhotoDto>> {
    state
        .services
        .photo_queries
        .get_photo(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/photos/{id}",
    params(("id" = i64, Path, description = "Photo id")),
    request_body = UpdatePhotoRequest,
    responses(
        (status = 200, description = "Photo updated.", body = PhotoDto),
        (status = 403, description = "Photo belongs to another user.", body = ErrorResponse),
        (status = 404, description = "No such photo.", body = ErrorResponse)
    ),
    tag = "Photos"
)]
pub async fn update_photo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePhotoRequest>,
) -> HttpResult<Json<PhotoDto>> {
    let command = UpdatePhotoCommand {
        id,
        title: payload.title,
        caption: payload.caption,
        photo_url: payload.photo_url,
    };

    state
        .services
        .photo_commands
        .update_photo(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/photos/{id}",
    params(("id" = i64, Path, description = "Photo id")),
    responses(
        (status = 204, description = "Photo deleted."),
        (status = 403, description = "Photo belongs to another user.", body = ErrorResponse),
        (status = 404, description = "No such photo.", body = ErrorResponse)
    ),
    tag = "Photos"
)]
pub async fn delete_photo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .photo_commands
        .delete_photo(&user, DeletePhotoCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
