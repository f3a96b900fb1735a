//! Error types for the Cart actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested cart entry was not found.
    #[error("Cart entry not found: {0}")]
    NotFound(String),

    /// The product does not exist in the catalog.
    #[error("Invalid product: {0}")]
    InvalidProduct(ProductId),

    /// Quantities start at 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The user has no cart entry for this product.
    #[error("{0} is not in the cart")]
    NotInCart(ProductId),

    /// The product lookup during validation failed.
    #[error("Product lookup failed: {0}")]
    ProductLookup(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
