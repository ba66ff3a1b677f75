//! Customer persistence. All reads and writes of customer records go through [`CustomerStore`].

mod memory;
mod postgres;
pub use memory::MemoryCustomerStore;
pub use postgres::PgCustomerStore;

use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use async_trait::async_trait;

/// Each operation is atomic: it either takes full effect or none.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Every stored customer, in no particular order.
    async fn list_all(&self) -> Result<Vec<Customer>, AppError>;

    /// Insert a customer and return it with its assigned id.
    /// Missing fields, an empty name or a duplicate email fail with [`AppError::ConstraintViolation`].
    async fn create(&self, candidate: NewCustomer) -> Result<Customer, AppError>;
}
