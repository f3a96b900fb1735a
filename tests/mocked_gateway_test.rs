use storefront::clients::{CartClient, OrderClient, ProductClient, WishlistClient};
use storefront::framework::mock::MockClient;
use storefront::framework::{FrameworkError, Listing};
use storefront::model::{CartEntry, Order, OrderId, OrderItem, Product, ProductCreate, ProductId, UserId, WishlistEntry, WishlistEntryId};
use storefront::notify::RecordingNotifier;
use storefront::order_actor::OrderError;
use storefront::product_actor::ProductError;
use storefront::session::Session;
use storefront::views::{CartToggler, OrderList, ProductListView, ShippingPolicy, WishlistToggler};

fn product(id: u32) -> Product {
    Product::new(
        ProductId(id),
        ProductCreate {
            name: format!("item{id}"),
            category: "stationery".to_string(),
            original_price: 1000,
            discount_rate: None,
            image_url: format!("item{id}.png"),
        },
    )
}

fn listing<T>(items: Vec<T>) -> Listing<T> {
    let total = items.len();
    Listing { items, total }
}

/// A failing add leaves the toggler exactly as it was and raises a notice.
#[tokio::test]
async fn test_failing_add_leaves_membership_unchanged() {
    let mut mock = MockClient::<CartEntry>::new();
    mock.expect_list().return_ok(listing(Vec::new()));
    mock.expect_create().return_err(FrameworkError::ActorClosed);

    let notifier = RecordingNotifier::new();
    let mut cart = CartToggler::new(CartClient::new(mock.client()), notifier.clone(), UserId::from("kim"));

    let result = cart.toggle(ProductId(1)).await;

    assert!(result.is_err());
    assert!(!cart.is_member(ProductId(1)));
    assert_eq!(cart.count(), 0);
    assert_eq!(notifier.errors().len(), 1);
    assert!(notifier.errors()[0].contains("cart"));
    mock.verify();
}

/// The add itself went through; only the count read after it failed.
/// The product must count as a member so the next toggle removes it.
#[tokio::test]
async fn test_add_counts_as_done_when_count_read_fails() {
    use storefront::model::CartEntryId;
    use storefront::views::Membership;

    let user = UserId::from("kim");
    let entry = CartEntry {
        id: CartEntryId(1),
        user_id: user.clone(),
        product_id: ProductId(1),
        quantity: 1,
    };

    let mut mock = MockClient::<CartEntry>::new();
    // add: no existing entry, create, then the count read fails
    mock.expect_list().return_ok(listing(Vec::new()));
    mock.expect_create().return_ok(CartEntryId(1));
    mock.expect_list().return_err(FrameworkError::ActorDropped);
    // remove: finds the entry, deletes it, count reads back zero
    mock.expect_list().return_ok(listing(vec![entry]));
    mock.expect_delete(CartEntryId(1)).return_ok(());
    mock.expect_list().return_ok(listing(Vec::new()));

    let notifier = RecordingNotifier::new();
    let mut cart = CartToggler::new(CartClient::new(mock.client()), notifier.clone(), user);

    assert_eq!(cart.toggle(ProductId(1)).await.unwrap(), Membership::Added);
    assert!(cart.is_member(ProductId(1)));
    assert_eq!(cart.count(), 1);

    assert_eq!(cart.toggle(ProductId(1)).await.unwrap(), Membership::Removed);
    assert!(!cart.is_member(ProductId(1)));
    assert_eq!(cart.count(), 0);

    assert!(notifier.errors().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_remove_counts_as_done_when_count_read_fails() {
    let user = UserId::from("kim");
    let entry = WishlistEntry {
        id: WishlistEntryId(2),
        user_id: user.clone(),
        product_id: ProductId(5),
    };

    let mut mock = MockClient::<WishlistEntry>::new();
    mock.expect_list().return_ok(listing(vec![entry.clone()]));
    mock.expect_list().return_ok(listing(vec![entry]));
    mock.expect_delete(WishlistEntryId(2)).return_ok(());
    mock.expect_list().return_err(FrameworkError::ActorClosed);

    let notifier = RecordingNotifier::new();
    let mut wishlist = WishlistToggler::new(WishlistClient::new(mock.client()), notifier.clone(), user);
    wishlist.sync().await.unwrap();

    wishlist.remove(ProductId(5)).await.unwrap();
    assert!(!wishlist.is_member(ProductId(5)));
    assert_eq!(wishlist.count(), 0);
    assert!(notifier.errors().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_failing_remove_keeps_member() {
    let mut mock = MockClient::<WishlistEntry>::new();
    let user = UserId::from("kim");
    let entry = WishlistEntry {
        id: WishlistEntryId(1),
        user_id: user.clone(),
        product_id: ProductId(3),
    };
    // sync
    mock.expect_list().return_ok(listing(vec![entry.clone()]));
    // remove: look up the entry, then delete it
    mock.expect_list().return_ok(listing(vec![entry]));
    mock.expect_delete(WishlistEntryId(1)).return_err(FrameworkError::ActorDropped);

    let notifier = RecordingNotifier::new();
    let mut wishlist = WishlistToggler::new(WishlistClient::new(mock.client()), notifier.clone(), user);
    wishlist.sync().await.unwrap();
    assert!(wishlist.is_member(ProductId(3)));

    assert!(wishlist.toggle(ProductId(3)).await.is_err());
    assert!(wishlist.is_member(ProductId(3)));
    assert_eq!(wishlist.count(), 1);
    assert_eq!(notifier.errors().len(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_failed_bulk_delete_leaves_table_and_selection() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_list().return_ok(listing(vec![product(1), product(2), product(3)]));
    mock.expect_delete(ProductId(1)).return_err(FrameworkError::ActorClosed);

    let notifier = RecordingNotifier::new();
    let mut view = ProductListView::new(
        ProductClient::new(mock.client()),
        Session::admin("manager01"),
        notifier.clone(),
        10,
    );
    view.load_page(1).await.unwrap();
    view.toggle_one(ProductId(1), true);
    view.toggle_one(ProductId(3), true);

    let result = view.delete_selected().await;

    assert!(matches!(result, Err(ProductError::DeleteInterrupted { .. })));
    assert_eq!(view.rows().len(), 3);
    assert_eq!(view.total(), 3);
    assert_eq!(view.selection().selected(), vec![ProductId(1), ProductId(3)]);
    assert_eq!(notifier.errors().len(), 1);
    assert!(notifier.successes().is_empty());
    mock.verify();
}

/// Rows the store deleted before the failure disappear; the page is reloaded
/// and the rows that survived stay checked.
#[tokio::test]
async fn test_partly_applied_delete_reloads_page() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_list().return_ok(listing(vec![product(1), product(2), product(3)]));
    mock.expect_delete(ProductId(1)).return_ok(());
    mock.expect_delete(ProductId(2)).return_err(FrameworkError::ActorClosed);
    mock.expect_list().return_ok(listing(vec![product(2), product(3)]));

    let notifier = RecordingNotifier::new();
    let mut view = ProductListView::new(
        ProductClient::new(mock.client()),
        Session::admin("manager01"),
        notifier.clone(),
        10,
    );
    view.load_page(1).await.unwrap();
    view.toggle_all(true);

    let result = view.delete_selected().await;

    match result {
        Err(ProductError::DeleteInterrupted { deleted, failed, .. }) => {
            assert_eq!(deleted, vec![ProductId(1)]);
            assert_eq!(failed, ProductId(2));
        }
        other => panic!("expected DeleteInterrupted, got {other:?}"),
    }
    let shown: Vec<_> = view.rows().iter().map(|row| row.id).collect();
    assert_eq!(shown, vec![ProductId(2), ProductId(3)]);
    assert_eq!(view.total(), 2);
    assert_eq!(view.selection().selected(), vec![ProductId(2), ProductId(3)]);
    assert!(view.is_all_checked());
    assert_eq!(notifier.errors().len(), 1);
    assert!(notifier.successes().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_delete_with_nothing_selected_makes_no_call() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_list().return_ok(listing(vec![product(1)]));

    let notifier = RecordingNotifier::new();
    let mut view = ProductListView::new(
        ProductClient::new(mock.client()),
        Session::admin("manager01"),
        notifier.clone(),
        10,
    );
    view.load_page(1).await.unwrap();

    assert_eq!(view.delete_selected().await.unwrap(), 0);
    assert_eq!(notifier.errors().len(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_failed_page_load_keeps_previous_rows() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_list().return_ok(Listing {
        items: vec![product(1), product(2)],
        total: 4,
    });
    mock.expect_list().return_err(FrameworkError::ActorClosed);

    let notifier = RecordingNotifier::new();
    let mut view = ProductListView::new(
        ProductClient::new(mock.client()),
        Session::admin("manager01"),
        notifier.clone(),
        2,
    );
    view.load_page(1).await.unwrap();
    view.toggle_all(true);

    assert!(view.next_page().await.is_err());
    assert_eq!(view.page(), 1);
    assert_eq!(view.rows().len(), 2);
    assert!(view.is_all_checked());
    assert_eq!(notifier.errors().len(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_unknown_order_totals_zero_with_notice() {
    let mut mock = MockClient::<Order>::new();
    let user = UserId::from("kim");
    let order = Order::new(
        OrderId(1),
        user.clone(),
        vec![OrderItem::new(ProductId(1), 1000, 2), OrderItem::new(ProductId(2), 500, 1)],
    );
    mock.expect_list().return_ok(listing(vec![order]));

    let notifier = RecordingNotifier::new();
    let mut orders = OrderList::new(
        OrderClient::new(mock.client()),
        notifier.clone(),
        user,
        ShippingPolicy::default(),
    );
    orders.fetch_data().await.unwrap();

    assert_eq!(orders.total_price(OrderId(1)), 2500);
    assert!(notifier.errors().is_empty());

    assert_eq!(orders.total_price(OrderId(99)), 0);
    assert!(!orders.is_shipping_free(OrderId(99)));
    assert_eq!(notifier.errors().len(), 2);
    mock.verify();
}

/// Totals of a huge stored order saturate rather than panic.
#[tokio::test]
async fn test_huge_order_total_saturates() {
    let mut mock = MockClient::<Order>::new();
    let user = UserId::from("kim");
    let order = Order::new(OrderId(1), user.clone(), vec![OrderItem::new(ProductId(1), u64::MAX / 2, 3)]);
    mock.expect_list().return_ok(listing(vec![order]));

    let notifier = RecordingNotifier::new();
    let mut orders = OrderList::new(
        OrderClient::new(mock.client()),
        notifier.clone(),
        user,
        ShippingPolicy::default(),
    );
    orders.fetch_data().await.unwrap();

    assert_eq!(orders.total_price(OrderId(1)), u64::MAX);
    assert!(orders.is_shipping_free(OrderId(1)));
    assert_eq!(orders.total_price_with_shipping(OrderId(1)), u64::MAX);
    assert!(notifier.errors().is_empty());
    mock.verify();
}

#[test]
fn test_shipping_threshold_is_inclusive() {
    let policy = ShippingPolicy::default();
    assert!(policy.is_free(30000));
    assert!(policy.is_free(30001));
    assert!(!policy.is_free(29999));
    assert_eq!(policy.fee_for(29999), 3000);
    assert_eq!(policy.fee_for(30000), 0);
}

#[tokio::test]
async fn test_failed_remove_order_does_not_refetch() {
    let mut mock = MockClient::<Order>::new();
    let user = UserId::from("kim");
    let order = Order::new(OrderId(1), user.clone(), vec![OrderItem::new(ProductId(1), 1000, 1)]);
    mock.expect_list().return_ok(listing(vec![order]));
    mock.expect_delete(OrderId(1)).return_err(FrameworkError::ActorClosed);

    let notifier = RecordingNotifier::new();
    let mut orders = OrderList::new(
        OrderClient::new(mock.client()),
        notifier.clone(),
        user,
        ShippingPolicy::default(),
    );
    orders.fetch_data().await.unwrap();

    let result = orders.remove_order(OrderId(1)).await;
    assert!(matches!(result, Err(OrderError::ActorCommunicationError(_))));
    assert_eq!(orders.orders().len(), 1);
    assert_eq!(notifier.errors().len(), 1);
    // No list request after the failed delete.
    mock.verify();
}

/// Real Order actor with a mocked catalog.
/// Exercises the Order actor's `on_create` check in isolation.
#[tokio::test]
async fn test_order_actor_with_mocked_catalog() {
    let mut catalog_mock = MockClient::<Product>::new();
    catalog_mock.expect_get(ProductId(1)).return_ok(Some(product(1)));
    catalog_mock.expect_get(ProductId(2)).return_ok(None);
    let catalog = ProductClient::new(catalog_mock.client());

    let (order_actor, order_client) = storefront::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(catalog));

    let result = order_client
        .place_order(
            &UserId::from("kim"),
            vec![OrderItem::new(ProductId(1), 1000, 1), OrderItem::new(ProductId(2), 500, 1)],
        )
        .await;
    assert_eq!(result, Err(OrderError::InvalidProduct(ProductId(2))));

    let stored = order_client.list_for_user(&UserId::from("kim")).await.unwrap();
    assert!(stored.is_empty());

    catalog_mock.verify();
    drop(order_client);
    actor_handle.await.expect("Order actor panicked");
}

/// Raw channel style: answer each request by hand and inspect its payload.
#[tokio::test]
async fn test_add_to_cart_bumps_existing_entry() {
    use storefront::cart_actor::CartAction;
    use storefront::framework::mock::{create_mock_client, expect_action, expect_list};
    use storefront::model::CartEntryId;

    let (client, mut receiver) = create_mock_client::<CartEntry>(10);
    let cart = CartClient::new(client);
    let user = UserId::from("kim");
    let existing = CartEntry {
        id: CartEntryId(4),
        user_id: user.clone(),
        product_id: ProductId(1),
        quantity: 1,
    };

    let task = tokio::spawn(async move { cart.add_to_cart(&user, ProductId(1)).await });

    // Lookup of the existing entry
    let (query, respond_to) = expect_list(&mut receiver).await.expect("Expected List request");
    assert!(query.matches(&existing));
    respond_to.send(Ok(listing(vec![existing.clone()]))).unwrap();

    // Bump instead of a second entry
    let (id, action, respond_to) = expect_action(&mut receiver).await.expect("Expected Action request");
    assert_eq!(id, CartEntryId(4));
    assert_eq!(action, CartAction::AddQuantity(1));
    respond_to.send(Ok(2)).unwrap();

    // Entry count
    let (_, respond_to) = expect_list(&mut receiver).await.expect("Expected List request");
    respond_to.send(Ok(listing(vec![existing]))).unwrap();

    assert_eq!(task.await.unwrap(), Ok(Some(1)));
}
