// tests/support/helpers.rs
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use car_rest_api::{
    application::{
        ports::{
            i18n::{Locale, MessageSource},
            time::Clock,
        },
        services::ApplicationServices,
    },
    domain::car::CarRepository,
    infrastructure::i18n::BundledMessageCatalog,
    presentation::http::{
        routes::build_router,
        state::{HttpState, PagingDefaults},
    },
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use super::mocks::{DummyClock, DummyTokenManager, InMemoryCarRepository};

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn english_catalog() -> Arc<dyn MessageSource> {
    Arc::new(BundledMessageCatalog::new(Locale::new("en")).expect("bundled catalogs parse"))
}

/// A catalog with no entries; every message falls back to its key.
pub struct EmptyMessages;

impl MessageSource for EmptyMessages {
    fn message(&self, _key: &str, _locale: &Locale) -> Option<String> {
        None
    }
}

pub fn build_test_state_with(
    repo: Arc<dyn CarRepository>,
    clock: Arc<dyn Clock>,
    messages: Arc<dyn MessageSource>,
) -> HttpState {
    let services = ApplicationServices::new(repo, Arc::new(DummyTokenManager), clock);
    HttpState {
        services: Arc::new(services),
        messages,
        default_locale: Locale::new("en"),
        paging: PagingDefaults::default(),
    }
}

pub fn build_test_state(repo: Arc<dyn CarRepository>) -> HttpState {
    build_test_state_with(repo, Arc::new(DummyClock), english_catalog())
}

pub fn router_for(state: HttpState) -> Router {
    build_router(state, &[ALLOWED_ORIGIN.to_string()])
}

/// Router over the five seeded cars.
pub fn make_test_router() -> Router {
    router_for(build_test_state(Arc::new(InMemoryCarRepository::seeded())))
}

pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    request(Method::GET, uri, token, None)
}

pub fn delete(uri: &str, token: Option<&str>) -> Request<Body> {
    request(Method::DELETE, uri, token, None)
}

pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds"),
        None => builder.body(Body::empty()).expect("request builds"),
    }
}

pub fn raw_json(method: Method, uri: &str, token: &str, raw: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw))
        .expect("request builds")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body is JSON")
}

pub fn header_str<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

/// Asserts status plus the `code` field of the error body and returns the
/// body for further checks.
pub async fn assert_error_response(response: Response, status: StatusCode, code: i64) -> Value {
    assert_eq!(response.status(), status);
    let body = body_json(response).await;
    assert_eq!(body["code"], code, "unexpected error body: {body}");
    body
}

pub async fn assert_empty_body(response: Response, status: StatusCode) {
    assert_eq!(response.status(), status);
    assert!(body_bytes(response).await.is_empty());
}
