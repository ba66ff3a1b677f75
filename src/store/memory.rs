//! In-process store for tests and local runs. Applies the same rules as the
//! `customers` table: required name and email, non-empty name, unique email.

use super::CustomerStore;
use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: Vec<Customer>,
    last_id: i64,
}

#[derive(Default)]
pub struct MemoryCustomerStore {
    table: RwLock<Table>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn create(&self, candidate: NewCustomer) -> Result<Customer, AppError> {
        let name = candidate
            .name
            .ok_or_else(|| AppError::ConstraintViolation("name must not be null".into()))?;
        let email = candidate
            .email
            .ok_or_else(|| AppError::ConstraintViolation("email must not be null".into()))?;
        if name.is_empty() {
            return Err(AppError::ConstraintViolation("name must not be empty".into()));
        }

        // Check and insert under one write guard so concurrent creates cannot both pass.
        let mut table = self.table.write().await;
        if table.rows.iter().any(|c| c.email == email) {
            return Err(AppError::ConstraintViolation(format!("duplicate email '{}'", email)));
        }
        table.last_id += 1;
        let row = Customer {
            id: table.last_id,
            name,
            email,
        };
        table.rows.push(row.clone());
        tracing::info!(id = row.id, "customer created");
        Ok(row)
    }
}
