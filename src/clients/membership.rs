//! The shape the cart and wishlist gateways share: a per-user set of product ids.

use crate::cart_actor::CartError;
use crate::clients::{CartClient, WishlistClient};
use crate::model::{ProductId, UserId};
use crate::wishlist_actor::WishlistError;
use async_trait::async_trait;

/// Membership of products in one of a user's lists.
///
/// [`MembershipToggler`](crate::views::MembershipToggler) is written against this
/// trait, so the same toggle logic drives the cart button and the wishlist heart.
#[async_trait]
pub trait MembershipGateway: Send + Sync {
    type Error: std::error::Error + Send + Sync;

    /// Name used in notices, e.g. "cart".
    fn kind(&self) -> &'static str;

    /// Product ids currently in the user's list.
    async fn fetch_members(&self, user_id: &UserId) -> Result<Vec<ProductId>, Self::Error>;

    /// Adds the product; returns the user's new entry count.
    ///
    /// `Ok(None)` means the product was added but the count could not be read.
    async fn add(&self, user_id: &UserId, product_id: ProductId) -> Result<Option<usize>, Self::Error>;

    /// Removes the product; returns the user's new entry count.
    ///
    /// `Ok(None)` means the product was removed but the count could not be read.
    async fn remove(&self, user_id: &UserId, product_id: ProductId) -> Result<Option<usize>, Self::Error>;
}

#[async_trait]
impl MembershipGateway for CartClient {
    type Error = CartError;

    fn kind(&self) -> &'static str {
        "cart"
    }

    async fn fetch_members(&self, user_id: &UserId) -> Result<Vec<ProductId>, CartError> {
        let entries = self.entries_for(user_id).await?;
        Ok(entries.into_iter().map(|entry| entry.product_id).collect())
    }

    async fn add(&self, user_id: &UserId, product_id: ProductId) -> Result<Option<usize>, CartError> {
        self.add_to_cart(user_id, product_id).await
    }

    async fn remove(&self, user_id: &UserId, product_id: ProductId) -> Result<Option<usize>, CartError> {
        self.remove_from_cart(user_id, product_id).await
    }
}

#[async_trait]
impl MembershipGateway for WishlistClient {
    type Error = WishlistError;

    fn kind(&self) -> &'static str {
        "wishlist"
    }

    async fn fetch_members(&self, user_id: &UserId) -> Result<Vec<ProductId>, WishlistError> {
        let entries = self.entries_for(user_id).await?;
        Ok(entries.into_iter().map(|entry| entry.product_id).collect())
    }

    async fn add(&self, user_id: &UserId, product_id: ProductId) -> Result<Option<usize>, WishlistError> {
        self.add_to_wishlist(user_id, product_id).await
    }

    async fn remove(&self, user_id: &UserId, product_id: ProductId) -> Result<Option<usize>, WishlistError> {
        self.remove_from_wishlist(user_id, product_id).await
    }
}
