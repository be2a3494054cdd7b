// src/application/queries/cars/get_by_id.rs
use super::CarQueryService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, CarDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::car::CarId,
};

impl CarQueryService {
    pub async fn find_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<CarDto> {
        ensure_capability(actor, &Self::read_capability())?;

        let Ok(id) = CarId::new(id) else {
            return Err(ApplicationError::car_not_found());
        };
        let car = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::car_not_found)?;
        Ok(car.into())
    }
}
