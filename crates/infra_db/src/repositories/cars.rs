//! Car and owner repository

use sqlx::PgPool;
use tracing::debug;

use crate::error::DatabaseError;

/// Repository for cars and their owners
#[derive(Debug, Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns true if a car with this id exists
    pub async fn exists(&self, car_id: i64) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM cars WHERE id = $1)")
            .bind(car_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Lists every car joined with its owner, ordered by car id
    pub async fn list_with_owners(&self) -> Result<Vec<CarWithOwnerRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CarWithOwnerRow>(
            r#"
            SELECT
                c.id,
                c.vin,
                c.make,
                c.model,
                c.year_of_manufacture,
                c.owner_id,
                o.name AS owner_name,
                o.email AS owner_email
            FROM cars c
            JOIN owners o ON o.id = c.owner_id
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded cars");
        Ok(rows)
    }
}

/// Database row for a car joined with its owner
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CarWithOwnerRow {
    pub id: i64,
    pub vin: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: i64,
    pub owner_name: String,
    pub owner_email: Option<String>,
}
