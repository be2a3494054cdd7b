// tests/support/mocks/repos.rs
use async_trait::async_trait;
use car_rest_api::domain::car::{Car, CarFilter, CarId, CarRepository, CarSortField, NewCar};
use car_rest_api::domain::errors::{DomainError, DomainResult};
use car_rest_api::domain::pagination::{Page, PageRequest, SortDirection};
use std::collections::BTreeMap;
use std::sync::Mutex;

struct Store {
    cars: BTreeMap<i64, Car>,
    next_id: i64,
}

/// Map-backed store; ids are handed out sequentially like the SQLite table.
pub struct InMemoryCarRepository {
    store: Mutex<Store>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::with_cars(Vec::new())
    }

    pub fn with_cars(cars: Vec<Car>) -> Self {
        let next_id = cars.iter().map(|car| car.id.0).max().unwrap_or(0) + 1;
        let cars = cars.into_iter().map(|car| (car.id.0, car)).collect();
        Self {
            store: Mutex::new(Store { cars, next_id }),
        }
    }

    pub fn seeded() -> Self {
        Self::with_cars(crate::support::builders::seed_cars())
    }

    pub fn get(&self, id: i64) -> Option<Car> {
        self.store.lock().unwrap().cars.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().cars.len()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn find_by_id(&self, id: CarId) -> DomainResult<Option<Car>> {
        Ok(self.get(id.0))
    }

    async fn find_all(&self) -> DomainResult<Vec<Car>> {
        Ok(self.store.lock().unwrap().cars.values().cloned().collect())
    }

    async fn find_page(
        &self,
        filter: &CarFilter,
        request: &PageRequest<CarSortField>,
    ) -> DomainResult<Page<Car>> {
        let mut matching: Vec<Car> = self
            .store
            .lock()
            .unwrap()
            .cars
            .values()
            .filter(|car| filter.matches(car))
            .cloned()
            .collect();

        if let Some(sort) = request.sort() {
            matching.sort_by(|a, b| {
                let ordering = sort.field.compare(a, b);
                let ordering = match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                };
                ordering.then_with(|| a.id.cmp(&b.id))
            });
        }

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(request.offset()).unwrap())
            .take(request.size() as usize)
            .collect();
        Ok(Page::new(items, total, request))
    }

    async fn insert(&self, car: NewCar) -> DomainResult<Car> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id;
        store.next_id += 1;
        let car = car.with_id(CarId(id));
        store.cars.insert(id, car.clone());
        Ok(car)
    }

    async fn update(&self, car: Car) -> DomainResult<Car> {
        let mut store = self.store.lock().unwrap();
        let stored = store
            .cars
            .get_mut(&car.id.0)
            .ok_or_else(|| DomainError::NotFound(format!("car {}", car.id.0)))?;
        let inserted_at = stored.inserted_at;
        *stored = Car { inserted_at, ..car };
        Ok(stored.clone())
    }

    async fn delete(&self, id: CarId) -> DomainResult<bool> {
        Ok(self.store.lock().unwrap().cars.remove(&id.0).is_some())
    }
}

/// Lookups by id succeed against the seed data; paging and every write fail
/// with the configured error.
pub struct FailingCarRepository {
    reads: InMemoryCarRepository,
    error: DomainError,
}

impl FailingCarRepository {
    pub fn new(error: DomainError) -> Self {
        Self {
            reads: InMemoryCarRepository::seeded(),
            error,
        }
    }
}

#[async_trait]
impl CarRepository for FailingCarRepository {
    async fn find_by_id(&self, id: CarId) -> DomainResult<Option<Car>> {
        self.reads.find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<Car>> {
        self.reads.find_all().await
    }

    async fn find_page(
        &self,
        _filter: &CarFilter,
        _request: &PageRequest<CarSortField>,
    ) -> DomainResult<Page<Car>> {
        Err(self.error.clone())
    }

    async fn insert(&self, _car: NewCar) -> DomainResult<Car> {
        Err(self.error.clone())
    }

    async fn update(&self, _car: Car) -> DomainResult<Car> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: CarId) -> DomainResult<bool> {
        Err(self.error.clone())
    }
}
