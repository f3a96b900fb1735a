//! # Storefront demo
//!
//! Walks the main flows against a live [`StorefrontSystem`]:
//! 1. An admin uploads a batch of products (one of them invalid).
//! 2. The admin pages through the catalog, selects rows, and bulk-deletes them.
//! 3. A shopper toggles wishlist and cart membership.
//! 4. The shopper places orders and checks totals and shipping.

use storefront::config::StorefrontConfig;
use storefront::lifecycle::{setup_tracing, StorefrontSystem};
use storefront::model::{OrderItem, ProductCreate};
use storefront::notify::TracingNotifier;
use storefront::session::Session;
use storefront::views::{CartToggler, OrderList, ProductListView, ShippingPolicy, WishlistToggler};
use tracing::{info, warn, Instrument};

fn product(name: &str, category: &str, original_price: u64, discount_rate: Option<f64>) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        category: category.to_string(),
        original_price,
        discount_rate,
        image_url: format!("https://img.example/{}.png", name.to_lowercase().replace(' ', "-")),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    info!(?config, "Starting storefront demo");
    let system = StorefrontSystem::new(&config);

    let admin = Session::admin("manager01");
    let shopper = Session::individual("kim");

    // --- Admin: upload and manage the catalog ---
    let span = tracing::info_span!("admin");
    async {
        let mut products = ProductListView::new(
            system.product_client.clone(),
            admin.clone(),
            TracingNotifier,
            config.default_page_size,
        );

        let batch = vec![
            product("Linen Shirt", "clothing", 39000, Some(0.2)),
            product("", "clothing", 12000, None),
            product("Canvas Tote", "bags", 18000, None),
            product("Desk Lamp", "home", 45000, Some(0.1)),
        ];
        if let Err(e) = products.upload_products(batch).await {
            warn!(error = %e, "Upload partially failed");
        }
        info!(total = products.total(), pages = products.total_pages(), "Catalog loaded");

        for row in products.rows() {
            info!(
                id = %row.id,
                name = %row.name,
                sale_price = row.sale_price(),
                discount = row.discount_percent(),
                "Row"
            );
        }

        if let Some(first) = products.rows().first().map(|row| row.id) {
            products.toggle_one(first, true);
            info!(all_checked = products.is_all_checked(), "Row selected");
            products.delete_selected().await?;
        }
        info!(total = products.total(), "After delete");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    // --- Shopper: wishlist, cart and orders ---
    let span = tracing::info_span!("shopper");
    async {
        let catalog = system.product_client.list_page(1, config.default_page_size).await?;
        let Some(pick) = catalog.items.first().cloned() else {
            warn!("Catalog is empty, nothing to shop for");
            return Ok(());
        };

        let mut wishlist = WishlistToggler::new(
            system.wishlist_client.clone(),
            TracingNotifier,
            shopper.user_id.clone(),
        );
        wishlist.sync().await?;
        let change = wishlist.toggle(pick.id).await?;
        info!(product_id = %pick.id, ?change, in_wishlist = wishlist.is_member(pick.id), "Wishlist toggled");

        let mut cart = CartToggler::new(
            system.cart_client.clone(),
            TracingNotifier,
            shopper.user_id.clone(),
        );
        cart.sync().await?;
        cart.toggle(pick.id).await?;
        info!(cart_count = cart.count(), "Cart updated");

        let small = system
            .order_client
            .place_order(&shopper.user_id, vec![OrderItem::new(pick.id, pick.sale_price(), 1)])
            .await?;
        let large = system
            .order_client
            .place_order(&shopper.user_id, vec![OrderItem::new(pick.id, pick.sale_price(), 3)])
            .await?;

        let mut orders = OrderList::new(
            system.order_client.clone(),
            TracingNotifier,
            shopper.user_id.clone(),
            ShippingPolicy::from(&config),
        );
        orders.fetch_data().await?;
        for id in [small, large] {
            info!(
                order_id = %id,
                total = orders.total_price(id),
                free_shipping = orders.is_shipping_free(id),
                grand_total = orders.total_price_with_shipping(id),
                "Order"
            );
        }

        orders.remove_order(small).await?;
        info!(remaining = orders.orders().len(), "Order removed");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
