//! Customers table DDL. Idempotent; applied once at startup.

use crate::error::AppError;
use sqlx::PgPool;

pub const CUSTOMERS_TABLE: &str = "customers";

const CUSTOMERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL CHECK (name <> ''),
        email TEXT NOT NULL UNIQUE
    )
"#;

/// Create the `customers` table when missing. Existing tables are left as they are.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    tracing::debug!(table = CUSTOMERS_TABLE, "ensuring table");
    sqlx::query(CUSTOMERS_DDL).execute(pool).await?;
    Ok(())
}
