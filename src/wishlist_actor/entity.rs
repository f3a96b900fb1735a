//! ActorEntity trait implementation for the WishlistEntry domain type.
//!
//! Wishlist entries are pure membership records: created, listed, deleted.

use super::error::WishlistError;
use crate::clients::{ActorClient, ProductClient};
use crate::framework::ActorEntity;
use crate::model::{WishlistCreate, WishlistEntry, WishlistEntryId};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for WishlistEntry {
    type Id = WishlistEntryId;
    type Create = WishlistCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ProductClient;
    type Error = WishlistError;

    fn from_create_params(id: WishlistEntryId, params: WishlistCreate) -> Result<Self, WishlistError> {
        Ok(Self {
            id,
            user_id: params.user_id,
            product_id: params.product_id,
        })
    }

    async fn on_create(&mut self, catalog: &ProductClient) -> Result<(), WishlistError> {
        match catalog.get(self.product_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(WishlistError::InvalidProduct(self.product_id)),
            Err(e) => Err(WishlistError::ProductLookup(e.to_string())),
        }
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &ProductClient) -> Result<(), WishlistError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &ProductClient) -> Result<(), WishlistError> {
        match action {}
    }
}
