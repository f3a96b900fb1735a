//! # Product Actor
//!
//! The catalog store. Holds every [`Product`] and enforces the upload rules in
//! [`ActorEntity::from_create_params`](crate::framework::ActorEntity::from_create_params).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`], shared with the catalog gateway
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use storefront::model::ProductCreate;
//! use storefront::product_actor;
//! use storefront::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, catalog) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let admin = Session::admin("manager01");
//!     let id = catalog
//!         .create_product(
//!             &admin,
//!             ProductCreate {
//!                 name: "Linen Shirt".to_string(),
//!                 category: "clothing".to_string(),
//!                 original_price: 39000,
//!                 discount_rate: Some(0.2),
//!                 image_url: "shirt.png".to_string(),
//!             },
//!         )
//!         .await?;
//!
//!     let page = catalog.list_page(1, 10).await?;
//!     assert_eq!(page.items[0].id, id);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
