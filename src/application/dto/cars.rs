// src/application/dto/cars.rs
use crate::domain::car::{Car, CarDraft, Price};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub version: i32,
    #[schema(value_type = f64, example = 40000.0)]
    pub price: Price,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub inserted_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Car> for CarDto {
    fn from(car: Car) -> Self {
        Self {
            id: car.id.into(),
            brand: car.brand,
            model: car.model,
            version: car.version,
            price: car.price,
            inserted_at: car.inserted_at,
            updated_at: car.updated_at,
        }
    }
}

/// Request body for create and replace. Server-managed properties (`id`,
/// `insertedAt`, `updatedAt`) are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarInput {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, code = "car.brand.size"))]
    pub brand: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 50, code = "car.model.size"))]
    pub model: String,
    #[validate(range(min = 0, code = "car.version.min"))]
    pub version: i32,
    #[validate(custom(function = "non_negative_price"))]
    #[schema(value_type = f64, example = 25000.0)]
    pub price: Price,
}

fn non_negative_price(price: &Price) -> Result<(), ValidationError> {
    if price.is_negative() {
        Err(ValidationError::new("car.price.min"))
    } else {
        Ok(())
    }
}

impl From<CarInput> for CarDraft {
    fn from(input: CarInput) -> Self {
        Self {
            brand: input.brand,
            model: input.model,
            version: input.version,
            price: input.price,
        }
    }
}
