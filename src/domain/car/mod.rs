// src/domain/car/mod.rs
pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{Car, CarDraft, NewCar};
pub use filter::{CarFilter, CarSortField};
pub use repository::CarRepository;
pub use value_objects::{CarId, Price};

/// Resource name used to derive the `CAR_*` authorities.
pub const CAR_RESOURCE: &str = "car";
