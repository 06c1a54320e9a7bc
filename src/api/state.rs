//! Shared application state type.

use crate::clients::ProductClient;

/// State handed to every handler. Cloning only clones the store client handle.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
}

impl AppState {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }
}
