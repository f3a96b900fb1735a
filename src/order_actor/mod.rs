//! # Order Actor
//!
//! Stores placed [`Order`]s. Runs with a [`ProductClient`](crate::clients::ProductClient)
//! as context: every line item must name a product that exists when the order is placed.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
