//! Catalog records.
//!
//! [`Product`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait.
//! See [`product_actor`](crate::product_actor) for the upload rules
//! ([`ProductError`](crate::product_actor::ProductError)).

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// List price in whole currency units.
    pub original_price: u64,
    /// Fraction in `[0, 1]`.
    pub discount_rate: f64,
    pub image_url: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `params` - Upload payload; a missing discount rate means no discount
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            category: params.category,
            original_price: params.original_price,
            discount_rate: params.discount_rate.unwrap_or(0.0),
            image_url: params.image_url,
        }
    }

    /// `original_price × (1 − discount_rate)`, rounded to the nearest unit.
    pub fn sale_price(&self) -> u64 {
        (self.original_price as f64 * (1.0 - self.discount_rate)).round() as u64
    }

    /// Discount as a display percentage (0.15 → 15).
    pub fn discount_percent(&self) -> f64 {
        self.discount_rate * 100.0
    }

    pub fn is_discounted(&self) -> bool {
        self.discount_rate > 0.0
    }
}

/// Payload for the admin product upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub original_price: u64,
    #[serde(default)]
    pub discount_rate: Option<f64>,
    pub image_url: String,
}
