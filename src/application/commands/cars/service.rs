// src/application/commands/cars/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{car::CarRepository, car::CAR_RESOURCE, security::Capability},
};

pub struct CarCommandService {
    pub(super) repo: Arc<dyn CarRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CarCommandService {
    pub fn new(repo: Arc<dyn CarRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

pub(super) fn car_capability(action: &str) -> Capability {
    Capability::new(CAR_RESOURCE, action)
}
