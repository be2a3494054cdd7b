// src/domain/mod.rs
pub mod car;
pub mod errors;
pub mod pagination;
pub mod security;
