// src/application/error.rs
use crate::domain::errors::{ConstraintViolation, DomainError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Which kind of not-found was raised. A generic miss (an out-of-range page,
/// an unknown route target) carries no body; an entity miss names its own
/// error code and message key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundKind {
    Resource,
    Entity { code: i32, message_key: String },
}

/// Where a validation failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationSource {
    /// While binding the request body, before any service was called.
    Binding,
    /// Inside a service operation or the store.
    Constraint,
}

#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    #[error("not found: {0:?}")]
    NotFound(NotFoundKind),

    #[error("validation failed ({origin:?}): {} violation(s)", .violations.len())]
    ValidationFailed {
        origin: ViolationSource,
        violations: Vec<ConstraintViolation>,
    },

    #[error("{0}")]
    Forbidden(String),

    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("internal failure: {0}")]
    Internal(String),
}

/// Error code carried by the car-specific not-found body.
pub const CAR_NOT_FOUND_CODE: i32 = 1;

impl ApplicationError {
    pub fn not_found() -> Self {
        Self::NotFound(NotFoundKind::Resource)
    }

    pub fn entity_not_found(code: i32, message_key: impl Into<String>) -> Self {
        Self::NotFound(NotFoundKind::Entity {
            code,
            message_key: message_key.into(),
        })
    }

    pub fn car_not_found() -> Self {
        Self::entity_not_found(CAR_NOT_FOUND_CODE, "car.notfound")
    }

    pub fn binding(violations: Vec<ConstraintViolation>) -> Self {
        Self::ValidationFailed {
            origin: ViolationSource::Binding,
            violations,
        }
    }

    pub fn constraint(violations: Vec<ConstraintViolation>) -> Self {
        Self::ValidationFailed {
            origin: ViolationSource::Constraint,
            violations,
        }
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ConstraintViolation(violations) => Self::constraint(violations),
            DomainError::NotFound(_) => Self::not_found(),
            DomainError::Transaction { .. } => match err.root_cause() {
                DomainError::ConstraintViolation(violations) => {
                    Self::constraint(violations.clone())
                }
                _ => Self::Internal(err.to_string()),
            },
            DomainError::Persistence(msg) => Self::Internal(msg),
        }
    }
}
