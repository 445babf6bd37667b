use crate::domain::cart::{parse_quantity, Cart, QuantityChange};
use crate::domain::catalog::Catalog;
use crate::domain::errors::DomainError;
use crate::domain::ports::KeyValueStore;
use crate::infrastructure::cart_store::CartStore;
use crate::render::{badge_for, render_cart_page, CartView};

/// File name of the storefront's cart page.
pub const CART_PAGE: &str = "Carrinho.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Cart,
    Other,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path.contains(CART_PAGE) {
            Page::Cart
        } else {
            Page::Other
        }
    }
}

/// Cart operations as triggered by UI events. Each one re-reads the stored
/// cart, changes a local copy, writes it back whole and then updates the view.
pub struct CartService<S, V> {
    store: CartStore<S>,
    catalog: Catalog,
    view: V,
}

impl<S: KeyValueStore, V: CartView> CartService<S, V> {
    pub fn new(backend: S, catalog: Catalog, view: V) -> Self {
        Self {
            store: CartStore::new(backend),
            catalog,
            view,
        }
    }

    /// Adds one ticket of `catalog_id`. Unknown ids leave the cart untouched
    /// and produce no confirmation.
    pub fn add_item(&mut self, catalog_id: &str) -> Result<(), DomainError> {
        let mut cart = self.store.load();
        let Some(item) = self.catalog.find(catalog_id) else {
            log::error!("Ticket not found: {}", catalog_id);
            return Err(DomainError::UnknownItem(catalog_id.to_string()));
        };

        let quantity = cart.add(item).quantity;
        let name = item.name.clone();
        self.store.save(&cart)?;
        log::info!("Added {} to cart (quantity {})", catalog_id, quantity);

        self.view.confirm(&format!("{} adicionado ao carrinho!", name));
        self.refresh_badge_count();
        Ok(())
    }

    /// Sets the quantity of line `id`. Zero or less removes the line through
    /// [`remove_item`](Self::remove_item); an id not in the cart still saves
    /// and re-renders the unchanged cart.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> Result<(), DomainError> {
        let mut cart = self.store.load();
        match cart.set_quantity(id, quantity) {
            Ok(QuantityChange::Removed) => return self.remove_item(id),
            Ok(QuantityChange::Updated(quantity)) => {
                log::info!("Set quantity of {} to {}", id, quantity);
            }
            Ok(QuantityChange::Missing) => {
                log::debug!("No cart line for {}, quantity change ignored", id);
            }
            Err(e) => {
                log::error!("Rejected quantity for {}: {}", id, e);
                return Err(e);
            }
        }

        self.store.save(&cart)?;
        self.render_cart()?;
        self.refresh_badge_count();
        Ok(())
    }

    /// [`set_quantity`](Self::set_quantity) fed from the text of a quantity
    /// field. Text that is not an integer is rejected and nothing is saved.
    pub fn set_quantity_input(&mut self, id: &str, raw: &str) -> Result<(), DomainError> {
        let quantity = parse_quantity(raw).map_err(|e| {
            log::error!("Rejected quantity for {}: {}", id, e);
            e
        })?;
        self.set_quantity(id, quantity)
    }

    pub fn remove_item(&mut self, id: &str) -> Result<(), DomainError> {
        let mut cart = self.store.load();
        if cart.remove(id) {
            log::info!("Removed {} from cart", id);
        }
        self.store.save(&cart)?;
        self.render_cart()?;
        self.refresh_badge_count();
        Ok(())
    }

    pub fn render_cart(&mut self) -> Result<(), DomainError> {
        let cart = self.store.load();
        let page = render_cart_page(&cart, &self.catalog)?;
        self.view.show_cart(&page);
        Ok(())
    }

    pub fn refresh_badge_count(&mut self) {
        let cart = self.store.load();
        self.view.show_badge(badge_for(&cart));
    }

    /// Page-load hook: the cart page renders the cart, every page refreshes
    /// the badge.
    pub fn on_page_load(&mut self, page: Page) -> Result<(), DomainError> {
        if page == Page::Cart {
            self.render_cart()?;
        }
        self.refresh_badge_count();
        Ok(())
    }

    /// The cart as currently stored.
    pub fn cart(&self) -> Cart {
        self.store.load()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn backend(&self) -> &S {
        self.store.backend()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (S, V) {
        (self.store.into_backend(), self.view)
    }
}
