//! Request DTO validation for products.
//!
//! Bodies arrive as raw JSON, are checked against [`PRODUCT_RULES`] and only
//! then decoded into the typed payloads the store accepts.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::ProductError;
use crate::domain::{ProductCreate, ProductPatch};
use crate::validation::{validate, FieldRule, FieldViolation, Mode};

pub const NAME_MIN_LEN: usize = 4;
pub const NAME_MAX_LEN: usize = 20;
pub const DESCRIPTION_MIN_LEN: usize = 4;
pub const DESCRIPTION_MAX_LEN: usize = 255;

pub const PRODUCT_RULES: &[FieldRule] = &[
    FieldRule::text("name", NAME_MIN_LEN, NAME_MAX_LEN),
    FieldRule::text("description", DESCRIPTION_MIN_LEN, DESCRIPTION_MAX_LEN),
    FieldRule::number("price"),
];

/// Validate a create body. All fields required.
pub fn validate_create(body: &Value) -> Result<(), Vec<FieldViolation>> {
    validate(body, PRODUCT_RULES, Mode::Create)
}

/// Validate an update body. Present fields use the create bounds.
pub fn validate_patch(body: &Value) -> Result<(), Vec<FieldViolation>> {
    validate(body, PRODUCT_RULES, Mode::Update)
}

pub fn parse_create(body: Value) -> Result<ProductCreate, ProductError> {
    validate_create(&body).map_err(ProductError::Validation)?;
    decode(body)
}

/// Unknown properties, `id` included, are dropped here.
pub fn parse_patch(body: Value) -> Result<ProductPatch, ProductError> {
    validate_patch(&body).map_err(ProductError::Validation)?;
    decode(body)
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ProductError> {
    serde_json::from_value(body).map_err(|e| {
        debug!(error = %e, "Validated body failed to decode");
        ProductError::InvalidPayload(e.to_string())
    })
}
