// src/application/commands/cars/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use service::CarCommandService;
