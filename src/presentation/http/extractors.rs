// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, AuthError},
    },
    presentation::http::state::HttpState,
};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Pulls the bearer token out of `headers`. An absent header and a header
/// that is not `Bearer <token>` are reported differently.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    if !headers.contains_key(AUTHORIZATION) {
        return Err(AuthError::MissingToken);
    }
    let header = headers
        .typed_get::<Authorization<Bearer>>()
        .ok_or(AuthError::MalformedToken)?;
    let token = header.token().trim();
    if token.is_empty() {
        return Err(AuthError::MalformedToken);
    }
    Ok(token.to_owned())
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(Self(*user));
        }

        // Mounted without `require_bearer`: validate here instead.
        let app_state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure("application state missing"))
        })?;

        let token = bearer_token(&parts.headers)?;
        let user = app_state.services.authenticate(&token).await?;
        parts.extensions.insert(user);
        Ok(Self(user))
    }
}
