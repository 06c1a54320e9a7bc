use tracing::{debug, instrument};

use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product_actor::ProductError;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: crate::actor_framework::ResourceClient<Product>,
}

impl_basic_client!(
    ProductClient,
    Product,
    ProductError,
    get = get_product,
    list = list_products,
    delete = delete_product
);

impl ProductClient {
    #[instrument(skip(self), fields(product_name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: String,
        patch: ProductPatch,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(ProductError::from)
    }

    /// Insert a record under its own id. Used to load fixtures at startup.
    #[instrument(skip(self), fields(product_id = %product.id))]
    pub async fn seed_product(&self, product: Product) -> Result<String, ProductError> {
        debug!("Sending request");
        self.inner.seed(product).await.map_err(ProductError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::mock_framework::{
        create_mock_client, expect_delete, expect_get, expect_list, expect_update,
    };

    #[tokio::test]
    async fn test_missing_product_maps_to_not_found() {
        let (inner, mut receiver) = create_mock_client::<Product>(4);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move { client.get_product("invalidID".to_string()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "invalidID");
        responder.send(Ok(None)).unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ProductError::NotFound("invalidID".to_string()))
        );
    }

    #[tokio::test]
    async fn test_list_passes_through_records() {
        let (inner, mut receiver) = create_mock_client::<Product>(4);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move { client.list_products().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(vec![Product::fixture()])).unwrap();

        assert_eq!(task.await.unwrap(), Ok(vec![Product::fixture()]));
    }

    #[tokio::test]
    async fn test_update_forwards_patch_and_maps_errors() {
        let (inner, mut receiver) = create_mock_client::<Product>(4);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move {
            let patch = ProductPatch {
                price: Some(5.0),
                ..Default::default()
            };
            client.update_product("42".to_string(), patch).await
        });

        let (id, patch, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, "42");
        assert_eq!(patch.price, Some(5.0));
        responder.send(Err(FrameworkError::NotFound(id))).unwrap();

        assert_eq!(task.await.unwrap(), Err(ProductError::NotFound("42".to_string())));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (inner, mut receiver) = create_mock_client::<Product>(4);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move { client.delete_product("1".to_string()).await });

        let (_, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        drop(responder);

        assert!(matches!(
            task.await.unwrap(),
            Err(ProductError::ActorCommunicationError(_))
        ));
    }
}
