//! Connection bootstrap for the PostgreSQL backend.

use crate::config::ServiceConfig;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Database every server has; used to issue `CREATE DATABASE` for the target.
const MAINTENANCE_DB: &str = "postgres";

pub fn parse_url(database_url: &str) -> Result<PgConnectOptions, ConfigError> {
    PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        message: e.to_string(),
    })
}

/// Create the database named in `database_url` if the server does not have it yet.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    ensure_database(&parse_url(database_url)?).await
}

/// Same as [`ensure_database_exists`] for already parsed options. A no-op when the
/// options name no database or name the maintenance database itself.
pub async fn ensure_database(target: &PgConnectOptions) -> Result<(), AppError> {
    let Some((admin, name)) = maintenance_target(target) else {
        return Ok(());
    };
    let mut conn = admin.connect().await?;
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        tracing::info!(database = %name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Build the shared pool from config.
pub async fn connect(config: &ServiceConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(parse_url(&config.database_url)?)
        .await?;
    Ok(pool)
}

/// Options for the maintenance database on the same server, plus the target name.
fn maintenance_target(target: &PgConnectOptions) -> Option<(PgConnectOptions, String)> {
    let name = target.get_database()?.to_string();
    if name.is_empty() || name == MAINTENANCE_DB {
        return None;
    }
    Some((target.clone().database(MAINTENANCE_DB), name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
