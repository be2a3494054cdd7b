// src/application/queries/cars/mod.rs
mod get_by_id;
mod list;
mod service;

pub use service::CarQueryService;
