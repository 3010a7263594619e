// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::login,
        crate::presentation::http::controllers::users::me,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::users::delete_user,
        crate::presentation::http::controllers::photos::list_photos,
        crate::presentation::http::controllers::photos::list_my_photos,
        crate::presentation::http::controllers::photos::create_photo,
        crate::presentation::http::controllers::photos::get_photo,
        crate::presentation::http::controllers::photos::update_photo,
        crate::presentation::http::controllers::photos::delete_photo,
        crate::presentation::http::controllers::profile_photo::get_profile_photo,
        crate::presentation::http::controllers::profile_photo::set_profile_photo,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::users::RegisterRequest,
            crate::presentation::http::controllers::users::LoginRequest,
            crate::presentation::http::controllers::users::LoginResponse,
            crate::presentation::http::controllers::users::UpdateUserRequest,
            crate::presentation::http::controllers::photos::CreatePhotoRequest,
            crate::presentation::http::controllers::photos::UpdatePhotoRequest,
            crate::presentation::http::controllers::profile_photo::SetProfilePhotoRequest,
            crate::application::dto::UserDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::PhotoDto,
            crate::application::dto::ProfilePhotoDto
        )
    ),
    tags(
        (name = "Users", description = "Registration, login and account endpoints"),
        (name = "Photos", description = "Photo ownership endpoints"),
        (name = "Profile photo", description = "The caller's single profile photo"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Photovault API",
        description = "Photo ownership backend with bearer-token auth",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}
