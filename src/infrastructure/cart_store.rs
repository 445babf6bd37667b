use crate::domain::cart::{Cart, LineItem};
use crate::domain::errors::DomainError;
use crate::domain::ports::KeyValueStore;

/// The single key the whole cart is stored under.
pub const CART_STORAGE_KEY: &str = "carrinhoZooCentral";

/// Owns the serialized cart record inside a [`KeyValueStore`].
pub struct CartStore<S> {
    backend: S,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Reads the stored cart. A missing, unreadable or corrupt record yields an
    /// empty cart; individual lines that cannot be read are dropped.
    pub fn load(&self) -> Cart {
        let raw = match self.backend.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                log::warn!("Could not read cart record, starting empty: {}", e);
                return Cart::new();
            }
        };

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Discarding malformed cart record: {}", e);
                return Cart::new();
            }
        };

        let lines = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<LineItem>(entry) {
                Ok(line) => Some(line),
                Err(e) => {
                    log::warn!("Skipping malformed cart line {}: {}", index, e);
                    None
                }
            })
            .collect();
        let cart = Cart::from_lines(lines);
        log::debug!("Loaded cart with {} line(s)", cart.lines().len());
        cart
    }

    /// Overwrites the stored record with `cart`.
    pub fn save(&mut self, cart: &Cart) -> Result<(), DomainError> {
        let raw = serde_json::to_string(cart.lines())?;
        self.backend.set(CART_STORAGE_KEY, &raw)?;
        log::debug!("Saved cart with {} line(s)", cart.lines().len());
        Ok(())
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}
