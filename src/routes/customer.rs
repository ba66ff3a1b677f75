//! `/api/customers`: GET lists, POST creates.

use crate::handlers::{create_customer, list_customers};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/customers", get(list_customers).post(create_customer))
        .with_state(state)
}
