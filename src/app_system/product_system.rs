use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use super::error::AppError;
use crate::actor_framework::ResourceActor;
use crate::clients::ProductClient;
use crate::domain::Product;

/// Owns the product store actor.
///
/// Responsible for starting the actor, loading the fixture and handling shutdown.
pub struct ProductSystem {
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ProductSystem {
    /// Spawn the store. With `seed`, the store starts with [`Product::fixture`].
    pub async fn start(mailbox_capacity: usize, seed: bool) -> Result<Self, AppError> {
        let product_id_counter = Arc::new(AtomicU64::new(1));
        let next_product_id = move || product_id_counter.fetch_add(1, Ordering::SeqCst).to_string();

        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(mailbox_capacity, next_product_id);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        let system = Self {
            product_client,
            handles: vec![product_handle],
        };

        if seed {
            let id = system.product_client.seed_product(Product::fixture()).await?;
            info!(product_id = %id, "Seeded product store");
        }

        Ok(system)
    }

    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        // The actor stops once every client clone is gone.
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(AppError::ActorTask(e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
