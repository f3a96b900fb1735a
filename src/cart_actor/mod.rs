//! Cart store: one [`CartEntry`] per (user, product) pair, with a quantity.
//!
//! The actor runs with a [`ProductClient`] as its context so new entries can be
//! checked against the catalog. Keeping one entry per pair is the gateway's job
//! (see [`CartClient::add_to_cart`](crate::clients::CartClient::add_to_cart)).

pub mod entity;
pub mod error;

pub use entity::CartAction;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::CartEntry;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CartEntry>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
