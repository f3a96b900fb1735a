use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ListQuery, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderItem, UserId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Gateway for placed orders.
///
/// Line items are checked against the catalog by the Order actor's
/// `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, items), fields(items = items.len()))]
    pub async fn place_order(&self, user_id: &UserId, items: Vec<OrderItem>) -> Result<OrderId, OrderError> {
        debug!(?items, "place_order called");
        let id = self
            .inner
            .create(OrderCreate {
                user_id: user_id.clone(),
                items,
            })
            .await
            .map_err(Self::map_error)?;
        info!(%id, "Order placed");
        Ok(id)
    }

    /// The user's orders, oldest first.
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        let owner = user_id.clone();
        let listing = self
            .list(ListQuery::all().filter(move |order: &Order| order.user_id == owner))
            .await?;
        Ok(listing.items)
    }

    #[instrument(skip(self))]
    pub async fn remove_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await?;
        info!(%id, "Order removed");
        Ok(())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        entity_error(e, OrderError::NotFound)
    }
}
