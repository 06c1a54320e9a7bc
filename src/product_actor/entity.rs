use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductPatch};

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Product from validated creation parameters.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `params` - Name, description and price
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
        })
    }

    /// Merges the provided fields onto the product.
    ///
    /// # Fields Updated
    /// - `name`, `description`, `price` when present in the patch
    ///
    /// The `id` is never touched.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_patch_keeps_other_fields() {
        let mut product = Product::fixture();
        product
            .on_update(ProductPatch {
                name: Some("UpdateProductTest".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(product.id, "1");
        assert_eq!(product.name, "UpdateProductTest");
        assert_eq!(product.description, "Description 1");
        assert_eq!(product.price, 100.0);
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let mut product = Product::fixture();
        product.on_update(ProductPatch::default()).unwrap();
        assert_eq!(product, Product::fixture());
    }
}
