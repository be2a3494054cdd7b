// src/infrastructure/repositories/error.rs
use crate::domain::errors::{ConstraintViolation, DomainError};
use sqlx::error::ErrorKind;

const CNT_CAR_PRICE: &str = "cars_price_non_negative";
const CNT_CAR_VERSION: &str = "cars_version_non_negative";
const CHECK_FAILED_PREFIX: &str = "CHECK constraint failed: ";

/// Store failures. A failed CHECK is reported as a transaction failure whose
/// root cause is the matching constraint violation; anything else is opaque.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::CheckViolation) => {
            let message = db_err.message();
            let constraint = db_err.constraint().map(str::to_owned).or_else(|| {
                message
                    .split_once(CHECK_FAILED_PREFIX)
                    .map(|(_, name)| name.trim().to_owned())
            });

            let root_cause = constraint
                .as_deref()
                .and_then(violation_for)
                .map(|violation| Box::new(DomainError::ConstraintViolation(vec![violation])));

            DomainError::Transaction {
                message: message.to_string(),
                root_cause,
            }
        }
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn violation_for(constraint: &str) -> Option<ConstraintViolation> {
    match constraint {
        CNT_CAR_PRICE => Some(ConstraintViolation::new("car.price", "car.price.min")),
        CNT_CAR_VERSION => Some(ConstraintViolation::new("car.version", "car.version.min")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_constraints_map_to_field_violations() {
        let violation = violation_for(CNT_CAR_PRICE).unwrap();
        assert_eq!(violation.field_name(), "price");
        assert_eq!(violation.message_key, "car.price.min");
        assert!(violation_for("cars_brand_not_blank").is_none());
    }

    #[test]
    fn non_database_errors_are_persistence_failures() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence(_)
        ));
    }
}
