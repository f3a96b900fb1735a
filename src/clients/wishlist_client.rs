use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ListQuery, ResourceClient};
use crate::model::{ProductId, UserId, WishlistCreate, WishlistEntry};
use crate::wishlist_actor::WishlistError;
use async_trait::async_trait;
use tracing::{info, instrument, warn};

/// Gateway for a user's wishlist.
#[derive(Clone)]
pub struct WishlistClient {
    inner: ResourceClient<WishlistEntry>,
}

impl WishlistClient {
    pub fn new(inner: ResourceClient<WishlistEntry>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn entries_for(&self, user_id: &UserId) -> Result<Vec<WishlistEntry>, WishlistError> {
        let owner = user_id.clone();
        let listing = self
            .list(ListQuery::all().filter(move |entry: &WishlistEntry| entry.user_id == owner))
            .await?;
        Ok(listing.items)
    }

    async fn entry_for(
        &self,
        user_id: &UserId,
        product_id: ProductId,
    ) -> Result<Option<WishlistEntry>, WishlistError> {
        let owner = user_id.clone();
        let listing = self
            .list(ListQuery::all().filter(move |entry: &WishlistEntry| {
                entry.user_id == owner && entry.product_id == product_id
            }))
            .await?;
        Ok(listing.items.into_iter().next())
    }

    pub async fn count(&self, user_id: &UserId) -> Result<usize, WishlistError> {
        let owner = user_id.clone();
        let listing = self
            .list(ListQuery::all().filter(move |entry: &WishlistEntry| entry.user_id == owner).window(0, 0))
            .await?;
        Ok(listing.total)
    }

    /// Entry count after a write; `None` when the read failed.
    async fn count_after_write(&self, user_id: &UserId) -> Option<usize> {
        match self.count(user_id).await {
            Ok(count) => Some(count),
            Err(e) => {
                warn!(%user_id, error = %e, "Count read failed after write");
                None
            }
        }
    }

    /// Marks the product as wanted. Adding a product twice is a no-op.
    /// Returns the new entry count, if it could be read.
    #[instrument(skip(self))]
    pub async fn add_to_wishlist(
        &self,
        user_id: &UserId,
        product_id: ProductId,
    ) -> Result<Option<usize>, WishlistError> {
        if self.entry_for(user_id, product_id).await?.is_none() {
            let id = self
                .inner
                .create(WishlistCreate {
                    user_id: user_id.clone(),
                    product_id,
                })
                .await
                .map_err(Self::map_error)?;
            info!(%id, %product_id, "Added to wishlist");
        }
        Ok(self.count_after_write(user_id).await)
    }

    /// Returns the new entry count, if it could be read.
    #[instrument(skip(self))]
    pub async fn remove_from_wishlist(
        &self,
        user_id: &UserId,
        product_id: ProductId,
    ) -> Result<Option<usize>, WishlistError> {
        let entry = self
            .entry_for(user_id, product_id)
            .await?
            .ok_or(WishlistError::NotInWishlist(product_id))?;
        self.delete(entry.id).await?;
        info!(id = %entry.id, %product_id, "Removed from wishlist");
        Ok(self.count_after_write(user_id).await)
    }
}

#[async_trait]
impl ActorClient<WishlistEntry> for WishlistClient {
    type Error = WishlistError;

    fn inner(&self) -> &ResourceClient<WishlistEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        entity_error(e, WishlistError::NotFound)
    }
}
