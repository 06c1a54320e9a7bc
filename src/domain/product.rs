use serde::{Deserialize, Serialize};

/// A product offered through the catalogue API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Payload for creating a new product. Only built from validated input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Partial update for an existing product.
///
/// Has no `id` field, so an id sent in the request body is dropped during
/// decoding and never reaches the stored record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    /// The record the store starts with unless seeding is disabled.
    pub fn fixture() -> Self {
        Self::new("1", "Product 1", "Description 1", 100.0)
    }
}
