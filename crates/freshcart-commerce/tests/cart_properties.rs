use freshcart_commerce::prelude::*;
use proptest::prelude::*;

fn item(id: &str, cents: i64) -> CartItem {
    CartItem::new(id, format!("Item {}", id), Money::new(cents, Currency::USD))
}

/// Recompute the total the slow way.
fn expected_total(store: &CartStore) -> i64 {
    store
        .items()
        .iter()
        .map(|line| line.price().amount_cents * line.quantity)
        .sum()
}

fn command() -> impl Strategy<Value = CartCommand> {
    let id = prop::sample::select(vec!["a", "b", "c", "d"]);
    prop_oneof![
        4 => (id.clone(), 0i64..5_000, -2i64..20).prop_map(|(id, cents, quantity)| {
            CartCommand::AddItem { item: item(id, cents), quantity }
        }),
        3 => (id.clone(), -3i64..30).prop_map(|(id, q)| CartCommand::update(id, q)),
        2 => id.prop_map(|id| CartCommand::remove(id)),
        1 => Just(CartCommand::ClearCart),
    ]
}

proptest! {
    #[test]
    fn total_always_matches_items(commands in prop::collection::vec(command(), 0..60)) {
        let mut store = CartStore::new();
        for command in commands {
            let before = store.clone();
            if store.dispatch(command).is_err() {
                prop_assert_eq!(&store, &before);
            }

            prop_assert_eq!(store.total().amount_cents, expected_total(&store));
            for line in store.items() {
                prop_assert!(line.quantity >= 1);
            }
            let mut ids: Vec<_> = store.items().iter().map(|l| l.id().clone()).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), store.unique_item_count());
        }
    }
}

#[test]
fn scenario_single_product_lifecycle() {
    let mut cart = CartStore::new();
    let a = ProductId::new("a");

    cart.add_item(item("a", 1000), 1).unwrap();
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.total(), Money::new(1000, Currency::USD));

    cart.add_item(item("a", 1000), 2).unwrap();
    assert_eq!(cart.find_item(&a).unwrap().quantity, 3);
    assert_eq!(cart.total(), Money::new(3000, Currency::USD));

    cart.update_quantity(&a, 1).unwrap();
    assert_eq!(cart.find_item(&a).unwrap().quantity, 1);
    assert_eq!(cart.total(), Money::new(1000, Currency::USD));

    cart.remove_item(&a);
    assert!(cart.items().is_empty());
    assert!(cart.total().is_zero());
}

#[test]
fn scenario_two_products() {
    let mut cart = CartStore::new();
    cart.add_item(item("b", 1500), 1).unwrap();
    cart.add_item(item("c", 500), 4).unwrap();
    assert_eq!(cart.total(), Money::new(3500, Currency::USD));
    assert_eq!(cart.total_item_count(), 5);
}

#[test]
fn update_sets_large_quantities_exactly() {
    let mut cart = CartStore::new();
    let a = ProductId::new("a");
    cart.add_item(item("a", 250), 1).unwrap();

    assert!(cart.update_quantity(&a, 10_000).unwrap());
    assert_eq!(cart.find_item(&a).unwrap().quantity, 10_000);
    assert_eq!(cart.total(), Money::new(2_500_000, Currency::USD));
}

#[test]
fn remove_unknown_leaves_state_unchanged() {
    let mut cart = CartStore::new();
    cart.add_item(item("a", 100), 2).unwrap();
    let before = cart.snapshot();

    assert!(!cart.remove_item(&ProductId::new("nonexistent")));
    assert_eq!(cart.state(), &before);
}

#[test]
fn clear_resets_regardless_of_prior_state() {
    let mut cart = CartStore::new();
    cart.add_item(item("a", 100), 7).unwrap();
    cart.add_item(item("b", 3), 2).unwrap();
    cart.clear();
    assert!(cart.items().is_empty());
    assert!(cart.total().is_zero());
    assert_eq!(cart.total_item_count(), 0);
}

#[tokio::test]
async fn browse_add_and_check_out() {
    let config = StoreConfig::default();
    let catalog = Catalog::fixture(config.currency).unwrap();
    let mut cart = CartStore::with_currency(config.currency);

    let results = catalog.search(
        &SearchQuery::new()
            .with_category("fruits")
            .with_sort(SortOption::PriceAsc),
    );
    for product in &results.products {
        cart.add_one(product.to_cart_item()).unwrap();
    }
    cart.update_quantity(&ProductId::new("1"), 3).unwrap();

    let nutrition = cart.nutrition_totals();
    assert!((nutrition.calories - (89.0 * 3.0 + 234.0)).abs() < 1e-9);

    let summary = config.checkout_summary(cart.state()).unwrap();
    assert_eq!(summary.subtotal.amount_cents, 3 * 299 + 499);
    assert_eq!(summary.grand_total.amount_cents, 3 * 299 + 499 + 299);
    assert_eq!(
        summary.remaining_for_free_delivery.amount_cents,
        14_400 - (3 * 299 + 499)
    );

    let sink = RecordingOrderSink::new();
    let date = chrono::NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let payload = place_order(&mut cart, &sink, date, config.clear_policy)
        .await
        .unwrap();

    assert!(cart.is_empty());
    assert_eq!(payload.date, 20250701);
    assert_eq!(payload.items.len(), 2);
    assert_eq!(payload.items[0].name, "Fresh Organic Bananas");
    assert_eq!(
        payload.items[0].description.as_deref(),
        Some("Sweet and ripe organic bananas, perfect for smoothies or snacking.")
    );
    assert_eq!(
        payload.items[1].description.as_deref(),
        Some("Creamy, ripe avocados perfect for toast, salads, or guacamole.")
    );
    assert_eq!(sink.orders().len(), 1);
}
