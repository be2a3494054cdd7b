// src/presentation/http/error.rs
use crate::application::{
    ApplicationResult,
    error::{ApplicationError, NotFoundKind},
    ports::i18n::{Locale, MessageSource},
};
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

pub const VALIDATION_ERROR_CODE: i32 = 100;
pub const FIELD_ERROR_CODE: i32 = 1;
pub const ACCESS_DENIED_CODE: i32 = 800;
pub const INTERNAL_ERROR_CODE: i32 = 999;

const VALIDATION_MESSAGE_KEY: &str = "exception.validation";
const INTERNAL_MESSAGE_KEY: &str = "exception.internal.server.error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorBody {
    pub code: i32,
    pub field_name: String,
    pub message: String,
}

impl ErrorBody {
    fn new(code: i32, message: String) -> Self {
        Self {
            code,
            message,
            field_errors: Vec::new(),
        }
    }
}

/// Maps every application error to its status and optional body. Generic
/// not-found and unauthenticated responses carry no body.
pub fn translate(
    err: &ApplicationError,
    messages: &dyn MessageSource,
    locale: &Locale,
) -> (StatusCode, Option<ErrorBody>) {
    match err {
        ApplicationError::NotFound(NotFoundKind::Resource) => (StatusCode::NOT_FOUND, None),
        ApplicationError::NotFound(NotFoundKind::Entity { code, message_key }) => (
            StatusCode::NOT_FOUND,
            Some(ErrorBody::new(*code, messages.resolve(message_key, locale))),
        ),
        ApplicationError::ValidationFailed { violations, .. } => {
            let mut body = ErrorBody::new(
                VALIDATION_ERROR_CODE,
                messages.resolve(VALIDATION_MESSAGE_KEY, locale),
            );
            body.field_errors = violations
                .iter()
                .map(|violation| FieldErrorBody {
                    code: FIELD_ERROR_CODE,
                    field_name: violation.field_name().to_owned(),
                    message: messages.resolve(&violation.message_key, locale),
                })
                .collect();
            (StatusCode::BAD_REQUEST, Some(body))
        }
        ApplicationError::Forbidden(message) => (
            StatusCode::FORBIDDEN,
            Some(ErrorBody::new(ACCESS_DENIED_CODE, message.clone())),
        ),
        ApplicationError::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, None),
        ApplicationError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Some(ErrorBody::new(
                INTERNAL_ERROR_CODE,
                messages.resolve(INTERNAL_MESSAGE_KEY, locale),
            )),
        ),
    }
}

/// Builds the final response for an error.
pub fn render(err: &ApplicationError, messages: &dyn MessageSource, locale: &Locale) -> Response {
    let (status, body) = translate(err, messages, locale);
    let mut response = match body {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    };
    if status == StatusCode::UNAUTHORIZED {
        response
            .headers_mut()
            .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
    }
    response
}

/// Marker left on error responses so the translation middleware can render
/// them in the caller's locale.
#[derive(Debug, Clone)]
pub struct PendingError(pub ApplicationError);

/// Stand-in catalog used before the middleware has localized a response:
/// every key resolves to itself.
struct MessageKeys;

impl MessageSource for MessageKeys {
    fn message(&self, _key: &str, _locale: &Locale) -> Option<String> {
        None
    }
}

#[derive(Debug)]
pub struct HttpError(ApplicationError);

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        Self(err)
    }

    pub fn error(&self) -> &ApplicationError {
        &self.0
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if let ApplicationError::Internal(detail) = &self.0 {
            tracing::error!(error = %detail, "internal error");
        }
        let mut response = render(&self.0, &MessageKeys, &Locale::default());
        response.extensions_mut().insert(PendingError(self.0));
        response
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
