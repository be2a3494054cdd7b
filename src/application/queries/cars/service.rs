// src/application/queries/cars/service.rs
use std::sync::Arc;

use crate::domain::{
    car::{CAR_RESOURCE, CarRepository},
    security::Capability,
};

pub struct CarQueryService {
    pub(super) repo: Arc<dyn CarRepository>,
}

impl CarQueryService {
    pub fn new(repo: Arc<dyn CarRepository>) -> Self {
        Self { repo }
    }

    pub fn read_capability() -> Capability {
        Capability::new(CAR_RESOURCE, "read")
    }
}
