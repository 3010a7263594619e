// src/presentation/http/middleware/require_auth.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::extractors::bearer_token;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Rejects the request with 401 unless it carries a valid bearer token. On
/// success the `AuthenticatedUser` is stored in the request extensions for
/// the `Authenticated` extractor.
///
/// Usage: `route_layer(axum::middleware::from_fn(require_bearer))`
pub async fn require_bearer(mut req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let token = match bearer_token(req.headers()) {
        Ok(token) => token,
        Err(err) => {
            tracing::debug!(reason = err.as_str(), path = %req.uri().path(), "request rejected");
            return HttpError::from_auth(err).into_response();
        }
    };

    match state.services.authenticate(&token).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => HttpError::from_auth(err).into_response(),
    }
}
