//! Product handlers.
//!
//! Each handler validates its input, calls the store client and relabels
//! failures with the message its endpoint reports.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::error::HttpError;
use super::state::AppState;
use crate::domain::Product;
use crate::product_actor::{parse_create, parse_patch, ProductError};

pub const NOT_FOUND: &str = "Not found";
pub const CREATION_FAILED: &str = "Creation failed";
pub const UPDATE_FAILED: &str = "Update failed";
pub const DELETE_FAILED: &str = "Delete failed";

/// Validation failures keep their own 400; anything else becomes `fallback`.
fn relabel(err: ProductError, fallback: HttpError) -> HttpError {
    match err {
        ProductError::Validation(violations) => {
            info!(fields = violations.len(), "Request failed validation");
            HttpError::from_violations(&violations)
        }
        other => {
            warn!(error = %other, "Product operation failed");
            fallback
        }
    }
}

fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, HttpError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))
}

/// Body for endpoints whose fields are all optional: an empty body reads as `{}`.
fn optional_json_body(body: &Bytes) -> Result<Value, HttpError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| {
        HttpError::BadRequest(format!("Failed to parse the request body as JSON: {e}"))
    })
}

/// List all products.
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Product>>, HttpError> {
    state
        .products
        .list_products()
        .await
        .map(Json)
        .map_err(|e| relabel(e, HttpError::NotFound(NOT_FOUND.into())))
}

/// Get one product.
pub async fn find_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, HttpError> {
    state
        .products
        .get_product(id)
        .await
        .map(Json)
        .map_err(|e| relabel(e, HttpError::NotFound(NOT_FOUND.into())))
}

/// Create a product. Responds 201 with the stored record.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), HttpError> {
    let params = parse_create(json_body(payload)?)
        .map_err(|e| relabel(e, HttpError::BadRequest(CREATION_FAILED.into())))?;

    let product = state
        .products
        .create_product(params)
        .await
        .map_err(|e| relabel(e, HttpError::BadRequest(CREATION_FAILED.into())))?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Partially update a product. An `id` in the body is ignored and an empty
/// body changes nothing.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, HttpError> {
    let patch = parse_patch(optional_json_body(&body)?)
        .map_err(|e| relabel(e, HttpError::NotFound(UPDATE_FAILED.into())))?;

    state
        .products
        .update_product(id, patch)
        .await
        .map(Json)
        .map_err(|e| relabel(e, HttpError::NotFound(UPDATE_FAILED.into())))
}

/// Delete a product, returning it as it was before removal.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, HttpError> {
    state
        .products
        .delete_product(id)
        .await
        .map(Json)
        .map_err(|e| relabel(e, HttpError::NotFound(DELETE_FAILED.into())))
}

/// Fallback for unknown routes and unsupported methods.
pub async fn unmatched(method: Method, uri: Uri) -> HttpError {
    HttpError::NotFound(format!("Cannot {} {}", method, uri.path()))
}
