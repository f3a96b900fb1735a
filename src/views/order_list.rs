//! The "my orders" tab: fetched orders and the totals derived from them.

use crate::clients::OrderClient;
use crate::config::StorefrontConfig;
use crate::model::{Order, OrderId, UserId};
use crate::notify::Notifier;
use crate::order_actor::OrderError;
use tracing::{debug, instrument, warn};

/// Free-shipping threshold and the fee charged below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    pub free_threshold: u64,
    pub fee: u64,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_threshold: 30000,
            fee: 3000,
        }
    }
}

impl From<&StorefrontConfig> for ShippingPolicy {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            free_threshold: config.shipping_free_threshold,
            fee: config.shipping_fee,
        }
    }
}

impl ShippingPolicy {
    /// Free at or above the threshold.
    pub fn is_free(&self, total: u64) -> bool {
        total >= self.free_threshold
    }

    pub fn fee_for(&self, total: u64) -> u64 {
        if self.is_free(total) {
            0
        } else {
            self.fee
        }
    }
}

/// The signed-in user's orders.
pub struct OrderList<N: Notifier> {
    gateway: OrderClient,
    notifier: N,
    user_id: UserId,
    shipping: ShippingPolicy,
    orders: Vec<Order>,
}

impl<N: Notifier> OrderList<N> {
    pub fn new(gateway: OrderClient, notifier: N, user_id: UserId, shipping: ShippingPolicy) -> Self {
        Self {
            gateway,
            notifier,
            user_id,
            shipping,
            orders: Vec::new(),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn shipping(&self) -> ShippingPolicy {
        self.shipping
    }

    /// Loads the user's orders. On failure an error notice is shown and the
    /// previous orders stay.
    #[instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn fetch_data(&mut self) -> Result<(), OrderError> {
        match self.gateway.list_for_user(&self.user_id).await {
            Ok(orders) => {
                debug!(count = orders.len(), "Orders loaded");
                self.orders = orders;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Order fetch failed");
                self.notifier
                    .error("Something went wrong while loading your orders");
                Err(e)
            }
        }
    }

    fn find(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    /// Sum of `unit_price × quantity` over the order's items.
    ///
    /// An order that is not in the list totals 0 and raises an error notice.
    pub fn total_price(&self, order_id: OrderId) -> u64 {
        match self.find(order_id) {
            Some(order) => order.total_price(),
            None => {
                warn!(%order_id, "Order not in list");
                self.notifier.error("Could not find that order");
                0
            }
        }
    }

    pub fn is_shipping_free(&self, order_id: OrderId) -> bool {
        self.shipping.is_free(self.total_price(order_id))
    }

    /// Total plus the shipping fee when the order does not ship free.
    pub fn total_price_with_shipping(&self, order_id: OrderId) -> u64 {
        let total = self.total_price(order_id);
        total.saturating_add(self.shipping.fee_for(total))
    }

    /// Deletes the order in the store, then reloads the list.
    ///
    /// The local list is only touched after the store confirms the delete.
    #[instrument(skip(self))]
    pub async fn remove_order(&mut self, order_id: OrderId) -> Result<(), OrderError> {
        if let Err(e) = self.gateway.remove_order(order_id).await {
            warn!(error = %e, "Order delete failed");
            self.notifier
                .error("Could not delete the order, please try again");
            return Err(e);
        }
        // A failed reload raises its own notice; the delete itself went through.
        let _ = self.fetch_data().await;
        self.notifier.success("Order deleted");
        Ok(())
    }
}
