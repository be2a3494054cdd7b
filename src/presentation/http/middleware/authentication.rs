// src/presentation/http/middleware/authentication.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Verifies the bearer token and stores the principal in the request
/// extensions. Capabilities are checked later by the services.
///
/// Usage: `axum::middleware::from_fn_with_state(state, require_authentication)`
pub async fn require_authentication(
    State(state): State<HttpState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return HttpError::from_error(ApplicationError::unauthenticated(
            "missing Authorization header",
        ))
        .into_response();
    };

    match state.services.authenticate(header.token()).await {
        Ok(user) => {
            tracing::debug!(user = %user.username, "request authenticated");
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
