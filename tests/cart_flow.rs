//! End-to-end cart behaviour through the public API: UI events in, stored
//! record and view updates out.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use ticket_cart::domain::cart::LineItem;
use ticket_cart::domain::ports::KeyValueStore;
use ticket_cart::infrastructure::{CartStore, FileStore, MemoryStore, CART_STORAGE_KEY};
use ticket_cart::render::{Badge, CartPage, CartView};
use ticket_cart::{CartService, Catalog, DomainError, Page};

#[derive(Default)]
struct RecordingView {
    confirmations: Vec<String>,
    pages: Vec<CartPage>,
    badge: Option<Badge>,
    badge_updates: usize,
}

impl CartView for RecordingView {
    fn confirm(&mut self, message: &str) {
        self.confirmations.push(message.to_string());
    }

    fn show_cart(&mut self, page: &CartPage) {
        self.pages.push(page.clone());
    }

    fn show_badge(&mut self, badge: Option<Badge>) {
        self.badge = badge;
        self.badge_updates += 1;
    }
}

fn service() -> CartService<MemoryStore, RecordingView> {
    CartService::new(
        MemoryStore::new(),
        Catalog::standard(),
        RecordingView::default(),
    )
}

fn stored(svc: &CartService<MemoryStore, RecordingView>) -> Option<String> {
    svc.backend().get(CART_STORAGE_KEY).expect("memory store never fails")
}

#[test]
fn adding_individual_to_empty_cart() {
    let mut svc = service();
    svc.add_item("individual").unwrap();

    assert_eq!(
        svc.cart().lines(),
        [LineItem {
            id: "individual".to_string(),
            name: "Ingresso Individual".to_string(),
            unit_price: BigDecimal::from_str("50.00").unwrap(),
            quantity: 1,
        }]
    );
    assert_eq!(svc.view().badge, Some(Badge { count: 1 }));
    assert_eq!(
        svc.view().confirmations,
        ["Ingresso Individual adicionado ao carrinho!"]
    );
}

#[test]
fn adding_same_ticket_twice_yields_one_line() {
    let mut svc = service();
    svc.add_item("infantil").unwrap();
    svc.add_item("infantil").unwrap();

    let cart = svc.cart();
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 2);
    assert_eq!(svc.view().badge, Some(Badge { count: 2 }));
}

#[test]
fn zero_and_negative_quantities_remove_the_line() {
    for quantity in [0, -3] {
        let mut svc = service();
        svc.add_item("individual").unwrap();
        svc.add_item("familia").unwrap();

        svc.set_quantity("individual", quantity).unwrap();

        let ids: Vec<String> = svc.cart().lines().iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids, ["familia"]);
        assert_eq!(svc.view().badge, Some(Badge { count: 1 }));
    }
}

#[test]
fn removing_unknown_id_keeps_record_byte_equal() {
    let mut svc = service();
    svc.add_item("individual").unwrap();
    svc.add_item("infantil").unwrap();
    let before = stored(&svc);

    svc.remove_item("nonexistent").unwrap();

    assert_eq!(stored(&svc), before);
}

#[test]
fn unknown_ticket_is_a_lookup_error_without_side_effects() {
    let mut svc = service();
    svc.add_item("individual").unwrap();
    let before = stored(&svc);
    let updates = svc.view().badge_updates;

    let result = svc.add_item("nonexistent");

    assert!(matches!(result, Err(DomainError::UnknownItem(_))));
    assert_eq!(stored(&svc), before);
    assert_eq!(svc.view().confirmations.len(), 1);
    assert_eq!(svc.view().badge_updates, updates);
}

#[test]
fn cart_page_summary_for_mixed_cart() {
    let mut svc = service();
    svc.add_item("individual").unwrap();
    svc.add_item("individual").unwrap();
    svc.add_item("infantil").unwrap();

    svc.on_page_load(Page::from_path("/pages/Carrinho.html")).unwrap();

    let page = svc.view().pages.last().expect("cart page rendered");
    assert!(!page.is_empty);
    assert_eq!(page.subtotal, "R$\u{a0}125,00");
    assert_eq!(page.discount, "R$\u{a0}0,00");
    assert_eq!(page.total, page.subtotal);
    assert_eq!(page.rows.len(), 2);
}

#[test]
fn emptying_the_cart_shows_placeholder_and_drops_badge() {
    let mut svc = service();
    svc.add_item("familia").unwrap();
    svc.remove_item("familia").unwrap();

    let page = svc.view().pages.last().unwrap();
    assert!(page.is_empty);
    assert!(page.items_html.is_empty());
    assert_eq!(svc.view().badge, None);
    assert_eq!(stored(&svc).as_deref(), Some("[]"));
}

#[test]
fn corrupt_record_degrades_to_empty_cart() {
    let mut backend = MemoryStore::new();
    backend.set(CART_STORAGE_KEY, "{{{").unwrap();
    let mut svc = CartService::new(backend, Catalog::standard(), RecordingView::default());

    svc.on_page_load(Page::Cart).unwrap();
    assert!(svc.view().pages[0].is_empty);

    svc.add_item("infantil").unwrap();
    assert_eq!(svc.cart().item_count(), 1);
}

#[test]
fn load_save_round_trip_is_stable() {
    let mut svc = service();
    svc.add_item("familia").unwrap();
    svc.add_item("individual").unwrap();
    svc.set_quantity("familia", 5).unwrap();

    let (backend, _) = svc.into_parts();
    let mut store = CartStore::new(backend);
    let loaded = store.load();
    let raw = store.backend().get(CART_STORAGE_KEY).unwrap();
    store.save(&loaded).unwrap();

    assert_eq!(store.load(), loaded);
    assert_eq!(store.backend().get(CART_STORAGE_KEY).unwrap(), raw);
}

#[test]
fn cart_persists_across_page_loads_in_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut first = CartService::new(
        FileStore::new(&path),
        Catalog::standard(),
        RecordingView::default(),
    );
    first.add_item("individual").unwrap();
    first.add_item("familia").unwrap();
    first.set_quantity_input("familia", "2").unwrap();

    let mut second = CartService::new(
        FileStore::new(&path),
        Catalog::standard(),
        RecordingView::default(),
    );
    second.on_page_load(Page::Other).unwrap();

    assert_eq!(second.view().badge, Some(Badge { count: 3 }));
    assert!(second.view().pages.is_empty());
    assert_eq!(second.cart().get("familia").unwrap().quantity, 2);
}
