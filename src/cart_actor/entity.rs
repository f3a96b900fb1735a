//! ActorEntity trait implementation for the CartEntry domain type.

use super::error::CartError;
use crate::clients::{ActorClient, ProductClient};
use crate::framework::ActorEntity;
use crate::model::{CartCreate, CartEntry, CartEntryId, CartUpdate};
use async_trait::async_trait;
use tracing::debug;

/// Custom operations on a single cart entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Adds to the quantity; returns the new quantity.
    AddQuantity(u32),
}

fn check_quantity(quantity: u32) -> Result<u32, CartError> {
    if quantity == 0 {
        return Err(CartError::InvalidQuantity(quantity));
    }
    Ok(quantity)
}

#[async_trait]
impl ActorEntity for CartEntry {
    type Id = CartEntryId;
    type Create = CartCreate;
    type Update = CartUpdate;
    type Action = CartAction;
    type ActionResult = u32;
    type Context = ProductClient;
    type Error = CartError;

    fn from_create_params(id: CartEntryId, params: CartCreate) -> Result<Self, CartError> {
        Ok(Self {
            id,
            user_id: params.user_id,
            product_id: params.product_id,
            quantity: check_quantity(params.quantity)?,
        })
    }

    /// Only products that exist in the catalog can be put in a cart.
    async fn on_create(&mut self, catalog: &ProductClient) -> Result<(), CartError> {
        debug!(product_id = %self.product_id, "Checking product");
        match catalog.get(self.product_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(CartError::InvalidProduct(self.product_id)),
            Err(e) => Err(CartError::ProductLookup(e.to_string())),
        }
    }

    async fn on_update(&mut self, update: CartUpdate, _ctx: &ProductClient) -> Result<(), CartError> {
        self.quantity = check_quantity(update.quantity)?;
        Ok(())
    }

    async fn handle_action(&mut self, action: CartAction, _ctx: &ProductClient) -> Result<u32, CartError> {
        match action {
            CartAction::AddQuantity(n) => {
                let quantity = self
                    .quantity
                    .checked_add(n)
                    .ok_or(CartError::InvalidQuantity(n))?;
                self.quantity = check_quantity(quantity)?;
                Ok(self.quantity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{Product, ProductCreate, ProductId, UserId};

    fn create(quantity: u32) -> CartCreate {
        CartCreate {
            user_id: UserId::from("kim"),
            product_id: ProductId(7),
            quantity,
        }
    }

    fn mug() -> Product {
        Product::new(
            ProductId(7),
            ProductCreate {
                name: "Mug".to_string(),
                category: "kitchen".to_string(),
                original_price: 8000,
                discount_rate: None,
                image_url: "mug.png".to_string(),
            },
        )
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let result = CartEntry::from_create_params(CartEntryId(1), create(0));
        assert_eq!(result.unwrap_err(), CartError::InvalidQuantity(0));
    }

    #[tokio::test]
    async fn test_on_create_checks_catalog() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(7)).return_ok(Some(mug()));
        mock.expect_get(ProductId(7)).return_ok(None);
        let catalog = ProductClient::new(mock.client());

        let mut entry = CartEntry::from_create_params(CartEntryId(1), create(1)).unwrap();
        assert!(entry.on_create(&catalog).await.is_ok());
        assert_eq!(
            entry.on_create(&catalog).await,
            Err(CartError::InvalidProduct(ProductId(7)))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_add_quantity_action() {
        let mock = MockClient::<Product>::new();
        let catalog = ProductClient::new(mock.client());

        let mut entry = CartEntry::from_create_params(CartEntryId(1), create(2)).unwrap();
        let quantity = entry
            .handle_action(CartAction::AddQuantity(3), &catalog)
            .await
            .unwrap();
        assert_eq!(quantity, 5);

        let rejected = entry.on_update(CartUpdate { quantity: 0 }, &catalog).await;
        assert_eq!(rejected, Err(CartError::InvalidQuantity(0)));
    }
}
