//! Cart state and its pure transitions. Nothing in here touches storage or UI.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::catalog::CatalogItem;
use super::errors::DomainError;

/// One ticket type in the cart. `name` and `unit_price` are copied from the
/// catalog when the line is created and are not kept in sync afterwards.
///
/// Records saved by the earlier storefront script use `nome`, `preco` and
/// `quantidade`; those names are still read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "preco")]
    pub unit_price: BigDecimal,
    #[serde(alias = "quantidade")]
    pub quantity: u32,
}

impl LineItem {
    pub fn from_catalog(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

/// Outcome of [`Cart::set_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Updated(u32),
    Removed,
    /// No line with that id; the cart is untouched.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: BigDecimal,
    pub discount: BigDecimal,
    pub total: BigDecimal,
}

/// Insertion-ordered line items, at most one per id, every quantity >= 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from lines of unknown provenance: zero-quantity lines are
    /// dropped and repeated ids are folded into their first occurrence.
    pub fn from_lines(lines: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.lines.iter_mut().find(|l| l.id == line.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity)
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Adds one unit of `item`, appending a fresh line if the cart has none yet.
    pub fn add(&mut self, item: &CatalogItem) -> &LineItem {
        let index = match self.lines.iter().position(|l| l.id == item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                index
            }
            None => {
                self.lines.push(LineItem::from_catalog(item));
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    /// Sets the quantity of an existing line. Zero or negative removes it.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> Result<QuantityChange, DomainError> {
        let Some(index) = self.lines.iter().position(|l| l.id == id) else {
            return Ok(QuantityChange::Missing);
        };
        if quantity <= 0 {
            self.lines.remove(index);
            return Ok(QuantityChange::Removed);
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| DomainError::InvalidQuantity(quantity.to_string()))?;
        self.lines[index].quantity = quantity;
        Ok(QuantityChange::Updated(quantity))
    }

    /// Returns whether a line was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != before
    }

    /// Total number of tickets across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// No discount rules exist yet, so the discount is always zero.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self
            .lines
            .iter()
            .fold(BigDecimal::from(0u32), |acc, l| acc + l.line_total());
        let discount = BigDecimal::from(0u32);
        let total = &subtotal - &discount;
        CartTotals {
            subtotal,
            discount,
            total,
        }
    }
}

/// Parses the text of a quantity field.
///
/// Only a plain base-10 integer (surrounding whitespace allowed) is accepted;
/// anything else is [`DomainError::InvalidQuantity`] and the caller leaves the
/// cart untouched.
pub fn parse_quantity(raw: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::InvalidQuantity(raw.to_string()))
}
