//! Server binary: reads config, prepares the database, serves the router.

use customer_service::{
    apply_migrations, build_app, connect, ensure_database_exists, AppState, PgCustomerStore, ServiceConfig,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("customer_service=info,tower_http=info")),
        )
        .init();

    ensure_database_exists(&config.database_url).await?;
    let pool = connect(&config).await?;
    apply_migrations(&pool).await?;

    let state = AppState::new(PgCustomerStore::new(pool));
    let app = build_app(state);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
