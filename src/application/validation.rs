// src/application/validation.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::errors::ConstraintViolation,
};
use validator::{Validate, ValidationErrors};

/// Flattens field errors into violations ordered by field name. Each path is
/// `prefix.field`, or the bare field when `prefix` is empty.
pub fn violations(errors: &ValidationErrors, prefix: &str) -> Vec<ConstraintViolation> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            let path = if prefix.is_empty() {
                field.to_string()
            } else {
                format!("{prefix}.{field}")
            };
            errors
                .iter()
                .map(move |error| ConstraintViolation::new(path.clone(), error.code.to_string()))
        })
        .collect()
}

/// Service-side check of an operation argument, e.g. `add.entity`.
pub fn validate_argument<T: Validate>(value: &T, path: &str) -> ApplicationResult<()> {
    value
        .validate()
        .map_err(|errors| ApplicationError::constraint(violations(&errors, path)))
}
