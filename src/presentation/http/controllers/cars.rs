// src/presentation/http/controllers/cars.rs
use crate::application::{
    authorization::ensure_capability,
    dto::{CarDto, CarInput},
    error::ApplicationError,
    queries::cars::CarQueryService,
};
use crate::domain::{
    car::{CarFilter, CarSortField},
    errors::ConstraintViolation,
    pagination::{PageRequest, Sort},
};
use crate::presentation::http::error::{ErrorBody, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, CurrentUri, ValidatedJson};
use crate::presentation::http::pagination::{PageWindow, pagination_headers};
use crate::presentation::http::state::{HttpState, PagingDefaults};
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::QueryRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

/// List query string. Values stay raw so that bad paging input can be
/// normalized instead of rejected.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CarListParams {
    /// Zero-based page index; negative values are treated as 0.
    pub page: Option<String>,
    /// Page size; values below 1 fall back to the default, larger values are capped.
    pub size: Option<String>,
    /// `property[,asc|desc]`, e.g. `price,desc`.
    pub sort: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub version: Option<String>,
}

impl CarListParams {
    fn page_request(
        &self,
        paging: PagingDefaults,
        violations: &mut Vec<ConstraintViolation>,
    ) -> PageRequest<CarSortField> {
        let page = self
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map_or(0, |page| u32::try_from(page.max(0)).unwrap_or(u32::MAX));

        let size = self
            .size
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|size| *size >= 1)
            .map_or(paging.default_size, |size| {
                u32::try_from(size).unwrap_or(u32::MAX).min(paging.max_size)
            });

        let request = PageRequest::new(page, size);
        match self.sort.as_deref().filter(|raw| !raw.trim().is_empty()) {
            None => request.with_sort(Sort::asc(CarSortField::Id)),
            Some(raw) => match raw.parse::<Sort<CarSortField>>() {
                Ok(sort) => request.with_sort(sort),
                Err(reason) => {
                    tracing::debug!(%reason, "rejecting sort parameter");
                    violations.push(ConstraintViolation::new("sort", "page.sort.unknown"));
                    request
                }
            },
        }
    }

    fn filter(&self, violations: &mut Vec<ConstraintViolation>) -> CarFilter {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        let version = match non_blank(&self.version) {
            Some(raw) => match raw.parse::<i32>() {
                Ok(version) => Some(version),
                Err(_) => {
                    violations.push(ConstraintViolation::new("version", "filter.version.invalid"));
                    None
                }
            },
            None => None,
        };

        CarFilter {
            brand: non_blank(&self.brand),
            model: non_blank(&self.model),
            version,
        }
    }
}

/// A path segment that is not an integer cannot name a car. Non-positive
/// integers go through to the service so the capability check still runs first.
fn parse_id(raw: &str) -> Result<i64, HttpError> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::from_error(ApplicationError::car_not_found()))
}

#[utoipa::path(
    get,
    path = "/api/cars",
    params(CarListParams),
    responses(
        (status = 200, description = "One page of cars. Navigation is in the Link and Pagination-* headers.", body = [CarDto]),
        (status = 400, description = "Invalid sort or filter.", body = ErrorBody),
        (status = 401, description = "Missing or invalid bearer token."),
        (status = 403, description = "CAR_READ not granted.", body = ErrorBody),
        (status = 404, description = "Page past the end of the collection.")
    ),
    security(("bearerAuth" = [])),
    tag = "Cars"
)]
pub async fn list_cars(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    CurrentUri(uri): CurrentUri,
    params: Result<Query<CarListParams>, QueryRejection>,
) -> HttpResult<(HeaderMap, Json<Vec<CarDto>>)> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable query string");
        HttpError::from_error(ApplicationError::binding(Vec::new()))
    })?;

    let mut violations = Vec::new();
    let request = params.page_request(state.paging, &mut violations);
    let filter = params.filter(&mut violations);
    if !violations.is_empty() {
        // a caller that may not read cars learns nothing about the parameters
        ensure_capability(Some(&user), &CarQueryService::read_capability()).into_http()?;
        return Err(HttpError::from_error(ApplicationError::binding(violations)));
    }

    let page = state
        .services
        .car_queries
        .find_all_paginated(Some(&user), &filter, &request)
        .await
        .into_http()?;

    let headers = pagination_headers(&uri, &PageWindow::from(&page)).map_err(|err| {
        tracing::debug!(error = %err, "requested page past the end");
        HttpError::from_error(err.into())
    })?;

    Ok((headers, Json(page.items)))
}

#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 200, description = "The car.", body = CarDto),
        (status = 401, description = "Missing or invalid bearer token."),
        (status = 403, description = "CAR_READ not granted.", body = ErrorBody),
        (status = 404, description = "No car with this id.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Cars"
)]
pub async fn get_car(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<CarDto>> {
    let id = parse_id(&id)?;
    state
        .services
        .car_queries
        .find_by_id(Some(&user), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/cars",
    request_body = CarInput,
    responses(
        (status = 201, description = "Created; the Location header points at the new car."),
        (status = 400, description = "Invalid car.", body = ErrorBody),
        (status = 401, description = "Missing or invalid bearer token."),
        (status = 403, description = "CAR_CREATE not granted.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Cars"
)]
pub async fn create_car(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    CurrentUri(uri): CurrentUri,
    ValidatedJson(input): ValidatedJson<CarInput>,
) -> HttpResult<Response> {
    let created = state
        .services
        .car_commands
        .add(Some(&user), input)
        .await
        .into_http()?;

    let location = HeaderValue::from_str(&uri.child(created.id)).map_err(|err| {
        HttpError::from_error(ApplicationError::internal(format!("location header: {err}")))
    })?;

    Ok((StatusCode::CREATED, [(LOCATION, location)]).into_response())
}

#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    params(("id" = i64, Path, description = "Car id")),
    request_body = CarInput,
    responses(
        (status = 204, description = "Replaced."),
        (status = 400, description = "Invalid car.", body = ErrorBody),
        (status = 401, description = "Missing or invalid bearer token."),
        (status = 403, description = "CAR_UPDATE not granted.", body = ErrorBody),
        (status = 404, description = "No car with this id.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Cars"
)]
pub async fn update_car(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<CarInput>,
) -> HttpResult<StatusCode> {
    let id = parse_id(&id)?;
    state
        .services
        .car_commands
        .update(Some(&user), id, input)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 204, description = "Deleted."),
        (status = 401, description = "Missing or invalid bearer token."),
        (status = 403, description = "CAR_DELETE not granted.", body = ErrorBody),
        (status = 404, description = "No car with this id.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Cars"
)]
pub async fn delete_car(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = parse_id(&id)?;
    state
        .services
        .car_commands
        .delete_by_id(Some(&user), id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
