// src/presentation/http/state.rs
use crate::application::{
    ports::i18n::{Locale, MessageSource},
    services::ApplicationServices,
};
use std::sync::Arc;

/// Page size policy for list endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PagingDefaults {
    pub default_size: u32,
    pub max_size: u32,
}

impl Default for PagingDefaults {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 100,
        }
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub messages: Arc<dyn MessageSource>,
    pub default_locale: Locale,
    pub paging: PagingDefaults,
}
