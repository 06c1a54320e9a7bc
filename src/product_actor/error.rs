use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::validation::FieldViolation;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Product validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),
    #[error("Invalid product payload: {0}")]
    InvalidPayload(String),
    #[error("Product rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::AlreadyExists(id) => {
                ProductError::Rejected(format!("duplicate id {id}"))
            }
            FrameworkError::Rejected(msg) => ProductError::Rejected(msg),
            other @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                ProductError::ActorCommunicationError(other.to_string())
            }
        }
    }
}
