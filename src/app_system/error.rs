use thiserror::Error;

use crate::product_actor::ProductError;

/// Process-level failures: startup, serving and shutdown.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
    #[error("Failed to seed store: {0}")]
    Seed(#[from] ProductError),
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}
