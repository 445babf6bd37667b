use crate::domain::cart::Cart;

/// Ticket count shown next to the cart link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub count: u64,
}

impl Badge {
    pub fn to_html(&self) -> String {
        format!("<span class=\"carrinho-count\">{}</span>", self.count)
    }
}

/// `None` means the badge should be removed.
pub fn badge_for(cart: &Cart) -> Option<Badge> {
    match cart.item_count() {
        0 => None,
        count => Some(Badge { count }),
    }
}
