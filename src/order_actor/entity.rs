//! ActorEntity trait implementation for the Order domain type.
//!
//! Orders are placed and deleted, never edited. Line items carry the unit price
//! the product sold for, so totals stay stable when the catalog changes.

use super::error::OrderError;
use crate::clients::{ActorClient, ProductClient};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ProductClient;
    type Error = OrderError;

    /// Creates a new Order from creation parameters.
    ///
    /// # Validation
    /// - at least one item
    /// - every item has a quantity of 1 or more
    /// - the total fits in a `u64`
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if let Some(item) = params.items.iter().find(|item| item.quantity == 0) {
            return Err(OrderError::InvalidQuantity(item.product_id));
        }
        let order = Self::new(id, params.user_id, params.items);
        if order.checked_total_price().is_none() {
            return Err(OrderError::TotalOverflow);
        }
        Ok(order)
    }

    /// Checks every line item against the catalog.
    async fn on_create(&mut self, catalog: &ProductClient) -> Result<(), OrderError> {
        for item in &self.items {
            debug!(product_id = %item.product_id, "Checking product");
            match catalog.get(item.product_id).await {
                Ok(Some(_)) => {}
                Ok(None) => return Err(OrderError::InvalidProduct(item.product_id)),
                Err(e) => return Err(OrderError::ProductLookup(e.to_string())),
            }
        }
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &ProductClient) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &ProductClient) -> Result<(), OrderError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderItem, ProductId, UserId};

    fn create(items: Vec<OrderItem>) -> OrderCreate {
        OrderCreate {
            user_id: UserId::from("kim"),
            items,
        }
    }

    #[test]
    fn test_empty_order_rejected() {
        let result = Order::from_create_params(OrderId(1), create(Vec::new()));
        assert_eq!(result.unwrap_err(), OrderError::EmptyOrder);
    }

    #[test]
    fn test_zero_quantity_item_rejected() {
        let items = vec![
            OrderItem::new(ProductId(1), 1000, 1),
            OrderItem::new(ProductId(2), 500, 0),
        ];
        let result = Order::from_create_params(OrderId(1), create(items));
        assert_eq!(result.unwrap_err(), OrderError::InvalidQuantity(ProductId(2)));
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let items = vec![OrderItem::new(ProductId(1), u64::MAX / 2, 3)];
        let result = Order::from_create_params(OrderId(1), create(items));
        assert_eq!(result.unwrap_err(), OrderError::TotalOverflow);

        let items = vec![
            OrderItem::new(ProductId(1), u64::MAX - 1, 1),
            OrderItem::new(ProductId(2), 2, 1),
        ];
        let result = Order::from_create_params(OrderId(1), create(items));
        assert_eq!(result.unwrap_err(), OrderError::TotalOverflow);
    }
}
