//! Customer handlers: list and create. Delegation only; store errors propagate unchanged.

use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let rows = state.store.list_all().await?;
    Ok(Json(rows))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<NewCustomer>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let row = state.store.create(body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
