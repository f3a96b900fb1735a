use crate::model::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for wishlist entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WishlistEntryId(pub u32);

impl From<u32> for WishlistEntryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for WishlistEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wish_{}", self.0)
    }
}

/// A product a user has marked as wanted. Membership only, no quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: WishlistEntryId,
    pub user_id: UserId,
    pub product_id: ProductId,
}

/// Payload for adding a product to a wishlist.
#[derive(Debug, Clone)]
pub struct WishlistCreate {
    pub user_id: UserId,
    pub product_id: ProductId,
}
