// src/domain/car/repository.rs
use crate::domain::car::entity::{Car, NewCar};
use crate::domain::car::filter::{CarFilter, CarSortField};
use crate::domain::car::value_objects::CarId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn find_by_id(&self, id: CarId) -> DomainResult<Option<Car>>;
    async fn find_all(&self) -> DomainResult<Vec<Car>>;
    async fn find_page(
        &self,
        filter: &CarFilter,
        request: &PageRequest<CarSortField>,
    ) -> DomainResult<Page<Car>>;
    async fn insert(&self, car: NewCar) -> DomainResult<Car>;
    /// Persists every field of `car` except `inserted_at`.
    async fn update(&self, car: Car) -> DomainResult<Car>;
    /// Returns `false` when no row had the id.
    async fn delete(&self, id: CarId) -> DomainResult<bool>;
}
