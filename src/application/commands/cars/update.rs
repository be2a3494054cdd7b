// src/application/commands/cars/update.rs
use super::{CarCommandService, service::car_capability};
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, CarDto, CarInput},
        error::{ApplicationError, ApplicationResult},
        validation::validate_argument,
    },
    domain::{car::CarId, errors::DomainError},
};

impl CarCommandService {
    /// Replaces every caller-editable field of car `id`.
    pub async fn update(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
        input: CarInput,
    ) -> ApplicationResult<CarDto> {
        ensure_capability(actor, &car_capability("update"))?;
        validate_argument(&input, "update.entity")?;

        let Ok(id) = CarId::new(id) else {
            return Err(ApplicationError::car_not_found());
        };
        let mut car = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::car_not_found)?;

        car.replace_with(input.into(), self.clock.now());
        // the row can vanish between the lookup and the write
        let updated = self.repo.update(car).await.map_err(|err| match err {
            DomainError::NotFound(_) => ApplicationError::car_not_found(),
            other => other.into(),
        })?;

        tracing::info!(
            car_id = %updated.id,
            user = actor.map(|a| a.username.as_str()),
            "car updated"
        );
        Ok(updated.into())
    }
}
