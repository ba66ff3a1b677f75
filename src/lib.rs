//! Customer service: a REST resource for customer records stored in PostgreSQL.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use app::build_app;
pub use config::ServiceConfig;
pub use db::{connect, ensure_database, ensure_database_exists, parse_url};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Customer, NewCustomer};
pub use routes::customer_routes;
pub use state::AppState;
pub use store::{CustomerStore, MemoryCustomerStore, PgCustomerStore};
