//! Product-specific domain logic: store entity, request DTO validation and errors.

pub mod dtos;
pub mod entity;
pub mod error;

pub use dtos::*;
pub use error::*;
