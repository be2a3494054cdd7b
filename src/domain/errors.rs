// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// A single failed constraint, addressed by the property path of the value
/// that broke it (for example `add.entity.price`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub property_path: String,
    pub message_key: String,
}

impl ConstraintViolation {
    pub fn new(property_path: impl Into<String>, message_key: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            message_key: message_key.into(),
        }
    }

    /// The leaf property name: everything after the last `.` of the path.
    pub fn field_name(&self) -> &str {
        self.property_path
            .rsplit_once('.')
            .map_or(self.property_path.as_str(), |(_, leaf)| leaf)
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_path, self.message_key)
    }
}

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("constraint violation: {}", join_violations(.0))]
    ConstraintViolation(Vec<ConstraintViolation>),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("transaction failed: {message}")]
    Transaction {
        message: String,
        root_cause: Option<Box<DomainError>>,
    },
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn violation(property_path: impl Into<String>, message_key: impl Into<String>) -> Self {
        Self::ConstraintViolation(vec![ConstraintViolation::new(property_path, message_key)])
    }

    /// Walk the transaction chain down to the innermost cause.
    pub fn root_cause(&self) -> &DomainError {
        match self {
            Self::Transaction {
                root_cause: Some(cause),
                ..
            } => cause.root_cause(),
            other => other,
        }
    }
}

fn join_violations(violations: &[ConstraintViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_takes_last_path_segment() {
        let violation = ConstraintViolation::new("update.entity.brand", "car.brand.size");
        assert_eq!(violation.field_name(), "brand");
    }

    #[test]
    fn field_name_without_dots_is_whole_path() {
        let violation = ConstraintViolation::new("price", "car.price.min");
        assert_eq!(violation.field_name(), "price");
    }

    #[test]
    fn root_cause_unwraps_nested_transactions() {
        let inner = DomainError::violation("car.price", "car.price.min");
        let wrapped = DomainError::Transaction {
            message: "commit failed".into(),
            root_cause: Some(Box::new(DomainError::Transaction {
                message: "flush failed".into(),
                root_cause: Some(Box::new(inner)),
            })),
        };

        assert!(matches!(
            wrapped.root_cause(),
            DomainError::ConstraintViolation(v) if v[0].field_name() == "price"
        ));
    }

    #[test]
    fn root_cause_of_plain_error_is_itself() {
        let err = DomainError::Persistence("disk full".into());
        assert!(matches!(err.root_cause(), DomainError::Persistence(_)));
    }
}
