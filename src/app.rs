//! Router composition.

use crate::routes::customer_routes;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Full application router. `/api/customers` is the only route.
pub fn build_app(state: AppState) -> Router {
    customer_routes(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
}
