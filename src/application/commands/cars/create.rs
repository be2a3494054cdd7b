// src/application/commands/cars/create.rs
use super::{CarCommandService, service::car_capability};
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, CarDto, CarInput},
        error::ApplicationResult,
        validation::validate_argument,
    },
    domain::car::NewCar,
};

impl CarCommandService {
    /// Stamps both timestamps with the current time and persists the car.
    pub async fn add(
        &self,
        actor: Option<&AuthenticatedUser>,
        input: CarInput,
    ) -> ApplicationResult<CarDto> {
        ensure_capability(actor, &car_capability("create"))?;
        validate_argument(&input, "add.entity")?;

        let new_car = NewCar::from_draft(input.into(), self.clock.now());
        let created = self.repo.insert(new_car).await?;

        tracing::info!(
            car_id = %created.id,
            user = actor.map(|a| a.username.as_str()),
            "car created"
        );
        Ok(created.into())
    }
}
