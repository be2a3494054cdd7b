// src/domain/car/filter.rs
use crate::domain::car::entity::Car;
use std::{cmp::Ordering, fmt, str::FromStr};

/// Exact-match predicates for listing. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilter {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub version: Option<i32>,
}

impl CarFilter {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.model.is_none() && self.version.is_none()
    }

    pub fn matches(&self, car: &Car) -> bool {
        self.brand.as_deref().is_none_or(|brand| car.brand == brand)
            && self.model.as_deref().is_none_or(|model| car.model == model)
            && self.version.is_none_or(|version| car.version == version)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarSortField {
    #[default]
    Id,
    Brand,
    Model,
    Version,
    Price,
    InsertedAt,
    UpdatedAt,
}

impl CarSortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Version => "version",
            Self::Price => "price",
            Self::InsertedAt => "insertedAt",
            Self::UpdatedAt => "updatedAt",
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Version => "version",
            Self::Price => "price_cents",
            Self::InsertedAt => "inserted_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    pub fn compare(self, a: &Car, b: &Car) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Brand => a.brand.cmp(&b.brand),
            Self::Model => a.model.cmp(&b.model),
            Self::Version => a.version.cmp(&b.version),
            Self::Price => a.price.cmp(&b.price),
            Self::InsertedAt => a.inserted_at.cmp(&b.inserted_at),
            Self::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

impl fmt::Display for CarSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarSortField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(Self::Id),
            "brand" => Ok(Self::Brand),
            "model" => Ok(Self::Model),
            "version" => Ok(Self::Version),
            "price" => Ok(Self::Price),
            "insertedAt" => Ok(Self::InsertedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            other => Err(format!("unknown sort property: {other}")),
        }
    }
}
