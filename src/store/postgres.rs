//! PostgreSQL-backed store. One transaction per operation; an early return drops
//! the open transaction, which rolls it back.

use super::CustomerStore;
use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_ALL: &str = "SELECT id, name, email FROM customers";
const INSERT: &str = "INSERT INTO customers (name, email) VALUES ($1, $2) RETURNING id, name, email";

#[derive(Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
}

impl PgCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        PgCustomerStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        let mut tx = self.pool.begin().await?;
        tracing::debug!(sql = %SELECT_ALL, "query (tx)");
        let rows = sqlx::query_as::<_, Customer>(SELECT_ALL)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(rows)
    }

    async fn create(&self, candidate: NewCustomer) -> Result<Customer, AppError> {
        let mut tx = self.pool.begin().await?;
        tracing::debug!(sql = %INSERT, "query (tx)");
        let row = sqlx::query_as::<_, Customer>(INSERT)
            .bind(candidate.name)
            .bind(candidate.email)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id = row.id, "customer created");
        Ok(row)
    }
}
