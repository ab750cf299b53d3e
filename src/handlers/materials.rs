use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::errors::ApiError;
use crate::handlers::success_response;
use crate::services::catalog::MaterialsQuery;
use crate::AppState;

/// Catalog read endpoints.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/materials", get(list_materials))
        .route("/categories", get(list_categories))
        .route("/suppliers", get(list_suppliers))
}

/// List materials joined with their suppliers.
///
/// Unknown `sort_by`/`filter_by` values fail query extraction with 400
/// before this handler runs.
async fn list_materials(
    State(state): State<AppState>,
    Query(query): Query<MaterialsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let materials = state.services.catalog.query_materials(&query).await?;
    Ok(success_response(materials))
}

async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let categories = state.services.catalog.list_categories().await?;
    Ok(success_response(categories))
}

async fn list_suppliers(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let suppliers = state.services.catalog.list_suppliers().await?;
    Ok(success_response(suppliers))
}
