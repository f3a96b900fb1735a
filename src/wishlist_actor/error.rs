//! Error types for the Wishlist actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during wishlist operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WishlistError {
    #[error("Wishlist entry not found: {0}")]
    NotFound(String),

    #[error("Invalid product: {0}")]
    InvalidProduct(ProductId),

    #[error("{0} is not in the wishlist")]
    NotInWishlist(ProductId),

    #[error("Product lookup failed: {0}")]
    ProductLookup(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for WishlistError {
    fn from(msg: String) -> Self {
        WishlistError::ActorCommunicationError(msg)
    }
}
