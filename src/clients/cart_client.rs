use crate::cart_actor::{CartAction, CartError};
use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ListQuery, ResourceClient};
use crate::model::{CartCreate, CartEntry, CartUpdate, ProductId, UserId};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Gateway for a user's cart.
///
/// Add and remove return the user's new entry count, which is what the header
/// badge shows. The count is read after the write; `None` means the write went
/// through but the count could not be read.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartEntry>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartEntry>) -> Self {
        Self { inner }
    }

    /// All of the user's cart entries, oldest first.
    #[instrument(skip(self))]
    pub async fn entries_for(&self, user_id: &UserId) -> Result<Vec<CartEntry>, CartError> {
        let owner = user_id.clone();
        let listing = self
            .list(ListQuery::all().filter(move |entry: &CartEntry| entry.user_id == owner))
            .await?;
        Ok(listing.items)
    }

    /// The user's entry for one product, if any.
    pub async fn entry_for(
        &self,
        user_id: &UserId,
        product_id: ProductId,
    ) -> Result<Option<CartEntry>, CartError> {
        let owner = user_id.clone();
        let listing = self
            .list(ListQuery::all().filter(move |entry: &CartEntry| {
                entry.user_id == owner && entry.product_id == product_id
            }))
            .await?;
        Ok(listing.items.into_iter().next())
    }

    /// Number of entries in the user's cart.
    pub async fn count(&self, user_id: &UserId) -> Result<usize, CartError> {
        let owner = user_id.clone();
        let listing = self
            .list(ListQuery::all().filter(move |entry: &CartEntry| entry.user_id == owner).window(0, 0))
            .await?;
        Ok(listing.total)
    }

    /// Entry count after a write. A failed read does not undo the write, so it
    /// is logged and reported as `None`.
    async fn count_after_write(&self, user_id: &UserId) -> Option<usize> {
        match self.count(user_id).await {
            Ok(count) => Some(count),
            Err(e) => {
                warn!(%user_id, error = %e, "Count read failed after write");
                None
            }
        }
    }

    /// Puts one unit of the product in the cart.
    ///
    /// A product already in the cart gets its quantity bumped instead of a
    /// second entry. Returns the new entry count, if it could be read.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, user_id: &UserId, product_id: ProductId) -> Result<Option<usize>, CartError> {
        match self.entry_for(user_id, product_id).await? {
            Some(entry) => {
                let quantity = self
                    .inner
                    .perform_action(entry.id, CartAction::AddQuantity(1))
                    .await
                    .map_err(Self::map_error)?;
                debug!(%product_id, quantity, "Quantity bumped");
            }
            None => {
                let id = self
                    .inner
                    .create(CartCreate {
                        user_id: user_id.clone(),
                        product_id,
                        quantity: 1,
                    })
                    .await
                    .map_err(Self::map_error)?;
                info!(%id, %product_id, "Added to cart");
            }
        }
        Ok(self.count_after_write(user_id).await)
    }

    /// Takes the product out of the cart. Returns the new entry count, if it
    /// could be read.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(
        &self,
        user_id: &UserId,
        product_id: ProductId,
    ) -> Result<Option<usize>, CartError> {
        let entry = self
            .entry_for(user_id, product_id)
            .await?
            .ok_or(CartError::NotInCart(product_id))?;
        self.delete(entry.id).await?;
        info!(id = %entry.id, %product_id, "Removed from cart");
        Ok(self.count_after_write(user_id).await)
    }

    /// Replaces the quantity of a product already in the cart.
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        user_id: &UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartEntry, CartError> {
        let entry = self
            .entry_for(user_id, product_id)
            .await?
            .ok_or(CartError::NotInCart(product_id))?;
        self.inner
            .update(entry.id, CartUpdate { quantity })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<CartEntry> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        entity_error(e, CartError::NotFound)
    }
}
