//! ActorEntity trait implementation for the Product domain type.
//!
//! Products are created by the admin upload and removed by the admin bulk delete.
//! They are never updated and have no custom actions, so both associated types
//! are [`Infallible`].

use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    /// Validates the upload payload and builds the Product.
    ///
    /// # Rules
    /// - `name`: not blank
    /// - `original_price`: positive
    /// - `discount_rate`: absent, or within `[0, 1]`
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        if params.original_price == 0 {
            return Err(ProductError::InvalidPrice(params.original_price));
        }
        if let Some(rate) = params.discount_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ProductError::InvalidDiscount(rate));
            }
        }
        Ok(Self::new(id, params))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), ProductError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), ProductError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, price: u64, rate: Option<f64>) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            category: "stationery".to_string(),
            original_price: price,
            discount_rate: rate,
            image_url: "pen.png".to_string(),
        }
    }

    #[test]
    fn test_valid_product_is_built() {
        let product = Product::from_create_params(ProductId(3), params("Pen", 1500, Some(0.1))).unwrap();
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.sale_price(), 1350);
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Product::from_create_params(ProductId(1), params("   ", 1500, None));
        assert_eq!(result.unwrap_err(), ProductError::EmptyName);
    }

    #[test]
    fn test_zero_price_rejected() {
        let result = Product::from_create_params(ProductId(1), params("Pen", 0, None));
        assert_eq!(result.unwrap_err(), ProductError::InvalidPrice(0));
    }

    #[test]
    fn test_discount_outside_unit_interval_rejected() {
        assert!(Product::from_create_params(ProductId(1), params("Pen", 10, Some(1.5))).is_err());
        assert!(Product::from_create_params(ProductId(1), params("Pen", 10, Some(-0.1))).is_err());
        assert!(Product::from_create_params(ProductId(1), params("Pen", 10, Some(f64::NAN))).is_err());
        assert!(Product::from_create_params(ProductId(1), params("Pen", 10, Some(1.0))).is_ok());
    }
}
