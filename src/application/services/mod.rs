// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::cars::CarCommandService,
        dto::AuthenticatedUser,
        ports::{security::TokenManager, time::Clock},
        queries::cars::CarQueryService,
        ApplicationResult,
    },
    domain::car::CarRepository,
};

pub struct ApplicationServices {
    pub car_commands: Arc<CarCommandService>,
    pub car_queries: Arc<CarQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        car_repo: Arc<dyn CarRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let car_commands = Arc::new(CarCommandService::new(
            Arc::clone(&car_repo),
            Arc::clone(&clock),
        ));
        let car_queries = Arc::new(CarQueryService::new(Arc::clone(&car_repo)));

        Self {
            car_commands,
            car_queries,
            token_manager,
        }
    }

    /// Verifies a raw bearer token. Capability checks happen later, inside
    /// each service operation.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
