// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::AuthenticatedUser, error::ApplicationError, ports::i18n::Locale,
        validation::violations,
    },
    presentation::http::pagination::UriTemplate,
};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, OriginalUri, Request},
    http::{HeaderMap, header::ACCEPT_LANGUAGE, request::Parts},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::HttpError;

/// The principal stored by the authentication middleware.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(Self)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthenticated("no authenticated principal"))
            })
    }
}

/// A JSON body that has been deserialized and validated. A body that cannot
/// be bound at all is rejected as a validation failure without field errors.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "request body rejected");
            HttpError::from_error(ApplicationError::binding(Vec::new()))
        })?;

        value.validate().map_err(|errors| {
            HttpError::from_error(ApplicationError::binding(violations(&errors, "")))
        })?;

        Ok(Self(value))
    }
}

/// The full URI the client requested, even inside nested routers.
#[derive(Debug, Clone)]
pub struct CurrentUri(pub UriTemplate);

impl<S> FromRequestParts<S> for CurrentUri
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map_or(&parts.uri, |original| &original.0);
        Ok(Self(UriTemplate::from_parts(&parts.headers, uri)))
    }
}

/// The highest-weighted concrete language in `Accept-Language`, if any.
pub fn preferred_locale(headers: &HeaderMap) -> Option<Locale> {
    let raw = headers.get(ACCEPT_LANGUAGE)?.to_str().ok()?;

    let mut best: Option<(f32, &str)> = None;
    for entry in raw.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or_default().trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }
        let weight = parts
            .find_map(|param| param.trim().strip_prefix("q="))
            .map_or(Some(1.0), |q| q.trim().parse::<f32>().ok())
            .unwrap_or(0.0);
        if weight <= 0.0 {
            continue;
        }
        if best.is_none_or(|(current, _)| weight > current) {
            best = Some((weight, tag));
        }
    }

    best.map(|(_, tag)| Locale::new(tag))
}
