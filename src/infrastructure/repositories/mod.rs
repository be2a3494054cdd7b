// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_car;

pub use error::map_sqlx;
pub use sqlite_car::SqliteCarRepository;
