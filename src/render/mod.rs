//! Presentation: turns a [`Cart`](crate::domain::cart::Cart) into cart-page
//! markup and a badge, and hands them to a [`CartView`].

pub mod badge;
pub mod console;
pub mod money;
pub mod page;

pub use badge::{badge_for, Badge};
pub use console::ConsoleView;
pub use money::format_brl;
pub use page::{render_cart_page, CartPage, CartRow};

/// The UI surface cart operations report to.
pub trait CartView {
    /// User-visible confirmation, e.g. after a ticket is added.
    fn confirm(&mut self, message: &str);
    fn show_cart(&mut self, page: &CartPage);
    /// Creates or replaces the badge; `None` removes it.
    fn show_badge(&mut self, badge: Option<Badge>);
}
