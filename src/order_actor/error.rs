//! Error types for the Order actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order needs at least one line item.
    #[error("Order has no items")]
    EmptyOrder,

    /// Every line item needs a positive quantity.
    #[error("Invalid quantity for {0}")]
    InvalidQuantity(ProductId),

    /// The order total does not fit in a `u64`.
    #[error("Order total is too large")]
    TotalOverflow,

    /// The product specified in the order does not exist.
    #[error("Invalid product: {0}")]
    InvalidProduct(ProductId),

    /// The product lookup during validation failed.
    #[error("Product lookup failed: {0}")]
    ProductLookup(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
