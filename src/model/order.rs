//! Order records.
//!
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait.
//! See [`order_actor`](crate::order_actor) for the creation rules ([`OrderCreate`]).

use crate::model::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A line item: one product at the price it was sold for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub unit_price: u64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(product_id: ProductId, unit_price: u64, quantity: u32) -> Self {
        Self {
            product_id,
            unit_price,
            quantity,
        }
    }

    /// `unit_price × quantity`, or `None` if it does not fit in a `u64`.
    pub fn checked_line_total(&self) -> Option<u64> {
        self.unit_price.checked_mul(u64::from(self.quantity))
    }

    /// `unit_price × quantity`, saturating at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `user_id` - The user who placed the order
    /// * `items` - Line items
    pub fn new(id: OrderId, user_id: UserId, items: Vec<OrderItem>) -> Self {
        Self { id, user_id, items }
    }

    /// Sum of `unit_price × quantity` over all items. Never stored.
    ///
    /// Saturates at `u64::MAX`. The order store rejects orders whose exact total
    /// does not fit, see [`checked_total_price`](Self::checked_total_price).
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.line_total()))
    }

    /// Exact total, or `None` on overflow.
    pub fn checked_total_price(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0u64, |total, item| total.checked_add(item.checked_line_total()?))
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_price_sums_line_totals() {
        let order = Order::new(
            OrderId(1),
            UserId::from("kim"),
            vec![
                OrderItem::new(ProductId(1), 1000, 2),
                OrderItem::new(ProductId(2), 500, 1),
            ],
        );
        assert_eq!(order.total_price(), 2500);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_total_price_saturates_instead_of_overflowing() {
        let order = Order::new(
            OrderId(1),
            UserId::from("kim"),
            vec![
                OrderItem::new(ProductId(1), u64::MAX / 2, 3),
                OrderItem::new(ProductId(2), u64::MAX, 1),
            ],
        );
        assert_eq!(order.total_price(), u64::MAX);
        assert_eq!(order.checked_total_price(), None);
    }

    #[test]
    fn test_checked_total_matches_total_when_it_fits() {
        let order = Order::new(
            OrderId(1),
            UserId::from("kim"),
            vec![OrderItem::new(ProductId(1), 1000, 2)],
        );
        assert_eq!(order.checked_total_price(), Some(2000));
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::new(OrderId(1), UserId::from("kim"), Vec::new());
        assert_eq!(order.total_price(), 0);
    }
}
