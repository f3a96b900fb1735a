//! Error types for the Product actor and the catalog gateway.

use crate::model::{ProductId, UserId};
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Product names must contain something besides whitespace.
    #[error("Product name must not be empty")]
    EmptyName,

    /// The list price must be positive.
    #[error("Invalid price: {0}")]
    InvalidPrice(u64),

    /// The discount rate must be a fraction in `[0, 1]`.
    #[error("Invalid discount rate: {0}")]
    InvalidDiscount(f64),

    /// Catalog writes are reserved for admin sessions.
    #[error("User {0} is not allowed to modify the catalog")]
    Forbidden(UserId),

    /// Pages are 1-based and must hold at least one row.
    #[error("Invalid page request: page {page}, page size {page_size}")]
    InvalidPage { page: usize, page_size: usize },

    /// A bulk upload where at least one product was rejected.
    /// Products in `created` were persisted anyway.
    #[error("Bulk upload failed for {} products ({} created)", .failures.len(), .created.len())]
    BulkCreateFailed {
        created: Vec<ProductId>,
        /// Input position and reason for each rejected product.
        failures: Vec<(usize, String)>,
    },

    /// A bulk delete stopped at `failed`; everything in `deleted` is already gone.
    #[error("Delete stopped at {failed} after {} deletions: {reason}", .deleted.len())]
    DeleteInterrupted {
        deleted: Vec<ProductId>,
        failed: ProductId,
        reason: String,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
