// src/presentation/http/middleware/mod.rs
pub mod authentication;
pub mod error_translation;

pub use authentication::require_authentication;
pub use error_translation::translate_errors;
