// src/infrastructure/repositories/sqlite_car.rs
use crate::domain::car::{Car, CarFilter, CarId, CarRepository, CarSortField, NewCar, Price};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest, Sort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use super::error::map_sqlx;

const CAR_COLUMNS: &str = "id, brand, model, version, price_cents, inserted_at, updated_at";

#[derive(Clone)]
pub struct SqliteCarRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCarRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CarRow {
    id: i64,
    brand: String,
    model: String,
    version: i32,
    price_cents: i64,
    inserted_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CarRow> for Car {
    type Error = DomainError;

    fn try_from(row: CarRow) -> Result<Self, Self::Error> {
        Ok(Car {
            id: CarId::new(row.id)?,
            brand: row.brand,
            model: row.model,
            version: row.version,
            price: Price::from_cents(row.price_cents),
            inserted_at: row.inserted_at,
            updated_at: row.updated_at,
        })
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &CarFilter) {
    if filter.is_empty() {
        return;
    }
    let mut separator = " WHERE ";
    if let Some(brand) = &filter.brand {
        builder.push(separator).push("brand = ").push_bind(brand.clone());
        separator = " AND ";
    }
    if let Some(model) = &filter.model {
        builder.push(separator).push("model = ").push_bind(model.clone());
        separator = " AND ";
    }
    if let Some(version) = filter.version {
        builder.push(separator).push("version = ").push_bind(version);
    }
}

#[async_trait]
impl CarRepository for SqliteCarRepository {
    async fn find_by_id(&self, id: CarId) -> DomainResult<Option<Car>> {
        let row = sqlx::query_as::<_, CarRow>(&format!("SELECT {CAR_COLUMNS} FROM cars WHERE id = ?"))
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Car::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Car>> {
        let rows = sqlx::query_as::<_, CarRow>(&format!("SELECT {CAR_COLUMNS} FROM cars ORDER BY id"))
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Car::try_from).collect()
    }

    async fn find_page(
        &self,
        filter: &CarFilter,
        request: &PageRequest<CarSortField>,
    ) -> DomainResult<Page<Car>> {
        let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM cars");
        push_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let sort = request
            .sort()
            .copied()
            .unwrap_or(Sort::asc(CarSortField::Id));

        let mut query = QueryBuilder::<Sqlite>::new(format!("SELECT {CAR_COLUMNS} FROM cars"));
        push_filter(&mut query, filter);
        // column names come from a closed enum, never from the request
        query
            .push(" ORDER BY ")
            .push(sort.field.column())
            .push(" ")
            .push(sort.direction.as_sql());
        if sort.field != CarSortField::Id {
            query.push(", id ASC");
        }
        query
            .push(" LIMIT ")
            .push_bind(i64::from(request.size()))
            .push(" OFFSET ")
            .push_bind(i64::try_from(request.offset()).unwrap_or(i64::MAX));

        let rows = query
            .build_query_as::<CarRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Car::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, u64::try_from(total).unwrap_or(0), request))
    }

    async fn insert(&self, car: NewCar) -> DomainResult<Car> {
        let row = sqlx::query_as::<_, CarRow>(&format!(
            "INSERT INTO cars (brand, model, version, price_cents, inserted_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {CAR_COLUMNS}"
        ))
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.version)
        .bind(car.price.cents())
        .bind(car.inserted_at)
        .bind(car.updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Car::try_from(row)
    }

    async fn update(&self, car: Car) -> DomainResult<Car> {
        let row = sqlx::query_as::<_, CarRow>(&format!(
            "UPDATE cars SET brand = ?, model = ?, version = ?, price_cents = ?, updated_at = ? \
             WHERE id = ? RETURNING {CAR_COLUMNS}"
        ))
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.version)
        .bind(car.price.cents())
        .bind(car.updated_at)
        .bind(i64::from(car.id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("car {}", car.id)))?;

        Car::try_from(row)
    }

    async fn delete(&self, id: CarId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}
