//! Cart records.
//!
//! [`CartEntry`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait.
//! Creation is checked against the product store (see [`cart_actor`](crate::cart_actor)).
//! Quantity changes go through [`CartUpdate`] and [`CartAction`](crate::cart_actor::CartAction).

use crate::model::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for cart entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CartEntryId(pub u32);

impl From<u32> for CartEntryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One product in a user's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: CartEntryId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Payload for putting a product in a cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Replaces the quantity of an existing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartUpdate {
    pub quantity: u32,
}
