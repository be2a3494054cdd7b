// src/domain/car/entity.rs
use crate::domain::car::value_objects::{CarId, Price};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub version: i32,
    pub price: Price,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-editable attributes of a car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDraft {
    pub brand: String,
    pub model: String,
    pub version: i32,
    pub price: Price,
}

/// A car that has been stamped but not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub version: i32,
    pub price: Price,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewCar {
    pub fn from_draft(draft: CarDraft, now: DateTime<Utc>) -> Self {
        Self {
            brand: draft.brand,
            model: draft.model,
            version: draft.version,
            price: draft.price,
            inserted_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(self, id: CarId) -> Car {
        Car {
            id,
            brand: self.brand,
            model: self.model,
            version: self.version,
            price: self.price,
            inserted_at: self.inserted_at,
            updated_at: self.updated_at,
        }
    }
}

impl Car {
    /// Overwrites every mutable attribute. `inserted_at` is kept and
    /// `updated_at` never moves backwards.
    pub fn replace_with(&mut self, draft: CarDraft, now: DateTime<Utc>) {
        self.brand = draft.brand;
        self.model = draft.model;
        self.version = draft.version;
        self.price = draft.price;
        self.updated_at = now.max(self.updated_at);
    }
}
