use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::errors::ApiError;
use crate::handlers::{success_response, validate_input};
use crate::services::cart::AddToCartInput;
use crate::AppState;

/// Cart endpoints, keyed by the client-supplied session id.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cart/:session_id", get(get_cart))
        .route("/cart/:session_id", delete(clear_cart))
        .route("/cart/:session_id/add", post(add_to_cart))
        .route("/cart/:session_id/item/:item_id", put(update_cart_item))
        .route("/cart/:session_id/item/:item_id", delete(remove_cart_item))
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddToCartRequest {
    pub material_id: i64,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[serde(default)]
    pub is_group: bool,
}

fn default_quantity() -> i32 {
    1
}

/// Quantity zero or below removes the line; no lower bound is validated
/// here on purpose.
#[derive(Debug, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

/// Get the cart with recomputed totals; a session without a cart gets the
/// empty view, not a 404.
async fn get_cart(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cart = state.services.cart.get_cart(&session_id).await?;
    Ok(success_response(cart))
}

async fn add_to_cart(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(payload): Json<AddToCartRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = AddToCartInput {
        material_id: payload.material_id,
        quantity: payload.quantity,
        is_group: payload.is_group,
    };
    let cart = state.services.cart.add_item(&session_id, input).await?;
    Ok(success_response(cart))
}

async fn update_cart_item(
    State(state): State<AppState>,
    Path((session_id, item_id)): Path<(String, i64)>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cart = state
        .services
        .cart
        .update_item(&session_id, item_id, payload.quantity)
        .await?;
    Ok(success_response(cart))
}

async fn remove_cart_item(
    State(state): State<AppState>,
    Path((session_id, item_id)): Path<(String, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    let cart = state.services.cart.remove_item(&session_id, item_id).await?;
    Ok(success_response(cart))
}

async fn clear_cart(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.services.cart.clear_cart(&session_id).await?;
    Ok(success_response(serde_json::json!({
        "message": "Cart cleared successfully"
    })))
}
