// src/application/queries/cars/list.rs
use super::CarQueryService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, CarDto},
        error::ApplicationResult,
    },
    domain::{
        car::{CarFilter, CarSortField},
        pagination::{Page, PageRequest},
    },
};

impl CarQueryService {
    /// Every car in store order.
    pub async fn find_all(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<Vec<CarDto>> {
        ensure_capability(actor, &Self::read_capability())?;
        let cars = self.repo.find_all().await?;
        Ok(cars.into_iter().map(Into::into).collect())
    }

    /// One page of cars. Pages past the end come back empty; deciding
    /// whether that is an error belongs to the caller.
    pub async fn find_all_paginated(
        &self,
        actor: Option<&AuthenticatedUser>,
        filter: &CarFilter,
        request: &PageRequest<CarSortField>,
    ) -> ApplicationResult<Page<CarDto>> {
        ensure_capability(actor, &Self::read_capability())?;
        let page = self.repo.find_page(filter, request).await?;
        Ok(page.map(Into::into))
    }
}
