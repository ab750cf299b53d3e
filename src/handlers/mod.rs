//! HTTP boundary: thin axum handlers over the core services.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use validator::Validate;

use crate::errors::ApiError;

pub mod cart;
pub mod materials;
pub mod orders;

/// Standard success response.
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response.
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Validates a request DTO, mapping failures to a 400 response.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input.validate()?;
    Ok(())
}
