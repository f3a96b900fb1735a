use crate::clients::{CartClient, OrderClient, ProductClient, WishlistClient};
use crate::config::StorefrontConfig;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Runtime orchestrator for the storefront stores.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping every store actor
/// - **Dependency Wiring**: Handing the catalog client to the stores that validate against it
///
/// # Example
///
/// ```rust
/// use storefront::config::StorefrontConfig;
/// use storefront::lifecycle::StorefrontSystem;
///
/// #[tokio::main]
/// async fn main() {
///     let system = StorefrontSystem::new(&StorefrontConfig::default());
///     // ... use system.product_client, system.cart_client, ...
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct StorefrontSystem {
    /// Catalog gateway
    pub product_client: ProductClient,

    pub cart_client: CartClient,

    pub wishlist_client: WishlistClient,

    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Creates and starts every store actor.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &StorefrontConfig) -> Self {
        let buffer = config.channel_buffer.max(1);

        // 1. Create actors (no dependencies)
        let (product_actor, product_client) = crate::product_actor::new(buffer);
        let (cart_actor, cart_client) = crate::cart_actor::new(buffer);
        let (wishlist_actor, wishlist_client) = crate::wishlist_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(buffer);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(product_actor.run(())),
            tokio::spawn(cart_actor.run(product_client.clone())),
            tokio::spawn(wishlist_actor.run(product_client.clone())),
            tokio::spawn(order_actor.run(product_client.clone())),
        ];
        info!(actors = handles.len(), buffer, "Storefront started");

        Self {
            product_client,
            cart_client,
            wishlist_client,
            order_client,
            handles,
        }
    }

    /// Gracefully shuts down the whole system.
    ///
    /// Drops the clients, which closes the channels, then waits for every actor
    /// task. Returns the first task failure (a panicked actor).
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down storefront...");

        // The cart, wishlist and order actors hold catalog clones as context, so
        // the catalog actor only exits after they do. Dependents go first.
        let Self {
            product_client,
            cart_client,
            wishlist_client,
            order_client,
            handles,
        } = self;
        drop(cart_client);
        drop(wishlist_client);
        drop(order_client);
        drop(product_client);

        for handle in handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
