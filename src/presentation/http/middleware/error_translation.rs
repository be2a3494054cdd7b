// src/presentation/http/middleware/error_translation.rs
use crate::presentation::http::{
    error::{PendingError, render},
    extractors::preferred_locale,
    state::HttpState,
};
use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

/// Re-renders error responses in the caller's `Accept-Language` locale.
/// Responses without a pending error pass through untouched.
pub async fn translate_errors(
    State(state): State<HttpState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let locale = preferred_locale(req.headers()).unwrap_or_else(|| state.default_locale.clone());

    let mut response = next.run(req).await;
    match response.extensions_mut().remove::<PendingError>() {
        Some(PendingError(err)) => render(&err, state.messages.as_ref(), &locale),
        None => response,
    }
}
