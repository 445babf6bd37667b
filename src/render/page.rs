use askama::Template;

use crate::domain::cart::Cart;
use crate::domain::catalog::Catalog;
use crate::domain::errors::DomainError;

use super::money::format_brl;

/// Display data for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    /// Quantity the "-" button asks for; 0 removes the line.
    pub decrement: i64,
    pub increment: u64,
    pub line_total: String,
}

/// Everything the cart page shows: the line-item markup, the empty-state
/// flag and the three summary slots, already currency-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPage {
    pub is_empty: bool,
    pub rows: Vec<CartRow>,
    pub items_html: String,
    pub subtotal: String,
    pub discount: String,
    pub total: String,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"{% for row in rows %}<div class="item-carrinho" data-id="{{ row.id }}">
  <div class="item-info">
    <h4>{{ row.name }}</h4>
    <p>{{ row.description }}</p>
  </div>
  <div class="item-quantity">
    <button type="button" data-action="set-quantity" data-id="{{ row.id }}" data-quantity="{{ row.decrement }}">-</button>
    <input type="number" min="1" value="{{ row.quantity }}" data-action="set-quantity" data-id="{{ row.id }}">
    <button type="button" data-action="set-quantity" data-id="{{ row.id }}" data-quantity="{{ row.increment }}">+</button>
  </div>
  <div class="item-price">{{ row.line_total }}</div>
  <button type="button" class="remover-item" data-action="remove" data-id="{{ row.id }}">&times;</button>
</div>
{% endfor %}"#
)]
struct CartItemsTemplate {
    rows: Vec<CartRow>,
}

/// Projects `cart` into a [`CartPage`]. Descriptions come from `catalog`;
/// a line whose ticket is no longer offered gets an empty description.
pub fn render_cart_page(cart: &Cart, catalog: &Catalog) -> Result<CartPage, DomainError> {
    let rows: Vec<CartRow> = cart
        .lines()
        .iter()
        .map(|line| CartRow {
            id: line.id.clone(),
            name: line.name.clone(),
            description: catalog
                .find(&line.id)
                .map(|item| item.description.clone())
                .unwrap_or_default(),
            quantity: line.quantity,
            decrement: i64::from(line.quantity) - 1,
            increment: u64::from(line.quantity) + 1,
            line_total: format_brl(&line.line_total()),
        })
        .collect();

    let items_html = if rows.is_empty() {
        String::new()
    } else {
        CartItemsTemplate { rows: rows.clone() }.render()?
    };

    let totals = cart.totals();
    Ok(CartPage {
        is_empty: cart.is_empty(),
        rows,
        items_html,
        subtotal: format_brl(&totals.subtotal),
        discount: format_brl(&totals.discount),
        total: format_brl(&totals.total),
    })
}
