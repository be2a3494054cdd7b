// src/presentation/http/routes.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::middleware::{require_authentication, translate_errors};
use crate::presentation::http::pagination::{
    PAGINATION_LIMIT, PAGINATION_PAGE, PAGINATION_PAGE_COUNT, PAGINATION_TOTAL_COUNT,
};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::cars,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{
        HeaderValue, Method,
        header::{LINK, LOCATION},
    },
    middleware::from_fn_with_state,
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let api = Router::new()
        .route("/cars", get(cars::list_cars).post(cars::create_car))
        .route(
            "/cars/{id}",
            get(cars::get_car)
                .put(cars::update_car)
                .delete(cars::delete_car),
        )
        .fallback(api_not_found)
        // unknown /api paths also require a token
        .layer(from_fn_with_state(state.clone(), require_authentication));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api", api)
        .layer(from_fn_with_state(state.clone(), translate_errors))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

async fn api_not_found() -> HttpError {
    HttpError::from_error(ApplicationError::not_found())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers([
            LINK,
            LOCATION,
            PAGINATION_TOTAL_COUNT.clone(),
            PAGINATION_PAGE.clone(),
            PAGINATION_PAGE_COUNT.clone(),
            PAGINATION_LIMIT.clone(),
        ])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
