//! Type-safe gateways around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Every gateway implements [`ActorClient`] for the shared `get` / `list` / `delete`
//! calls and adds the operations its screens need on top.

pub mod actor_client;
pub mod cart_client;
pub mod membership;
pub mod order_client;
pub mod product_client;
pub mod wishlist_client;

pub use actor_client::ActorClient;
pub use cart_client::*;
pub use membership::*;
pub use order_client::*;
pub use product_client::*;
pub use wishlist_client::*;
