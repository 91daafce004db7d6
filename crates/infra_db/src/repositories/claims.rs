//! Claims repository

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::DatabaseError;

/// Repository for claims filed against cars
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves all claims for a car
    pub async fn find_by_car(&self, car_id: i64) -> Result<Vec<ClaimRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT id, car_id, claim_date, description, amount
            FROM claims
            WHERE car_id = $1
            ORDER BY claim_date, id
            "#,
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts a claim and returns the stored row
    ///
    /// The statement runs in autocommit mode, so the row is committed once
    /// this returns.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ForeignKeyViolation` if the car does not exist
    pub async fn insert(&self, claim: NewClaimRow) -> Result<ClaimRow, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            INSERT INTO claims (car_id, claim_date, description, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id, car_id, claim_date, description, amount
            "#,
        )
        .bind(claim.car_id)
        .bind(claim.claim_date)
        .bind(claim.description)
        .bind(claim.amount)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

/// Database row for a claim
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub id: i64,
    pub car_id: i64,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

/// Data for inserting a claim
#[derive(Debug, Clone)]
pub struct NewClaimRow {
    pub car_id: i64,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}
