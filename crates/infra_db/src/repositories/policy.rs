//! Policy repository

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::DatabaseError;

/// Repository for insurance policies
///
/// Policies are written outside this system; the repository only reads them.
#[derive(Debug, Clone)]
pub struct PolicyRepository {
    pool: PgPool,
}

impl PolicyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves all policies for a car
    pub async fn find_by_car(&self, car_id: i64) -> Result<Vec<PolicyRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, car_id, start_date, end_date, provider
            FROM policies
            WHERE car_id = $1
            ORDER BY start_date, id
            "#,
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Retrieves every policy
    pub async fn find_all(&self) -> Result<Vec<PolicyRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, car_id, start_date, end_date, provider
            FROM policies
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Database row for a policy
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PolicyRow {
    pub id: i64,
    pub car_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub provider: String,
}
