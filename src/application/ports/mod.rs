// src/application/ports/mod.rs
pub mod i18n;
pub mod security;
pub mod time;

