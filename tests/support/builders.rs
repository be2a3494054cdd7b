// tests/support/builders.rs
use car_rest_api::application::dto::CarInput;
use car_rest_api::domain::car::{Car, CarId, Price};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

fn seeded_at() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("valid seed timestamp")
        .with_timezone(&Utc)
}

/// The five cars the seed migration inserts.
pub fn seed_cars() -> Vec<Car> {
    [
        (1, "BMW", "320d", 1, 4_000_000),
        (2, "Audi", "A3 2.0 TDI", 0, 3_500_000),
        (3, "Mercedes", "A 220d", 0, 2_500_000),
        (4, "Fiat", "Punto", 0, 1_000_000),
        (5, "VW", "Polo", 0, 1_600_000),
    ]
    .into_iter()
    .map(|(id, brand, model, version, cents)| Car {
        id: CarId(id),
        brand: brand.into(),
        model: model.into(),
        version,
        price: Price::from_cents(cents),
        inserted_at: seeded_at(),
        updated_at: seeded_at(),
    })
    .collect()
}

pub struct CarInputBuilder {
    brand: String,
    model: String,
    version: i32,
    price: Price,
}

impl CarInputBuilder {
    pub fn new() -> Self {
        Self {
            brand: "Alfa Romeo".into(),
            model: "Giulia".into(),
            version: 1,
            price: Price::from_cents(4_550_000),
        }
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn price_cents(mut self, cents: i64) -> Self {
        self.price = Price::from_cents(cents);
        self
    }

    pub fn build(self) -> CarInput {
        CarInput {
            brand: self.brand,
            model: self.model,
            version: self.version,
            price: self.price,
        }
    }

    /// The wire form of the input, as a client would post it.
    pub fn json(self) -> Value {
        json!({
            "brand": self.brand,
            "model": self.model,
            "version": self.version,
            "price": self.price.as_f64(),
        })
    }
}

impl Default for CarInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}
