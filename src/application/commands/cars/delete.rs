// src/application/commands/cars/delete.rs
use super::{CarCommandService, service::car_capability};
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, CarDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::car::CarId,
};

impl CarCommandService {
    pub async fn delete(
        &self,
        actor: Option<&AuthenticatedUser>,
        car: &CarDto,
    ) -> ApplicationResult<()> {
        self.delete_by_id(actor, car.id).await
    }

    pub async fn delete_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, &car_capability("delete"))?;

        let Ok(id) = CarId::new(id) else {
            return Err(ApplicationError::car_not_found());
        };
        if !self.repo.delete(id).await? {
            return Err(ApplicationError::car_not_found());
        }

        tracing::info!(
            car_id = %id,
            user = actor.map(|a| a.username.as_str()),
            "car deleted"
        );
        Ok(())
    }
}
