use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::errors::ApiError;
use crate::handlers::{created_response, success_response, validate_input};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/:session_id", get(list_orders))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(min = 1))]
    pub session_id: String,
}

/// Convert the session's cart into a confirmed order.
async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let order = state.services.orders.checkout(&payload.session_id).await?;
    Ok(created_response(serde_json::json!({
        "message": "Order placed successfully",
        "order_id": order.id,
        "total_amount": order.total_amount,
    })))
}

async fn list_orders(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let orders = state.services.orders.list_orders(&session_id).await?;
    Ok(success_response(orders))
}
