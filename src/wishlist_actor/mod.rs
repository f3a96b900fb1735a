//! Wishlist store. Same wiring as the cart store, without quantities.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::WishlistClient;
use crate::framework::ResourceActor;
use crate::model::WishlistEntry;

/// Creates a new Wishlist actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<WishlistEntry>, WishlistClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, WishlistClient::new(generic_client))
}
