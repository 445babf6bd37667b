use std::io::Write;

use super::{Badge, CartPage, CartView};

/// [`CartView`] that writes to a terminal (or any writer).
pub struct ConsoleView<W> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("Could not write to console: {}", e);
        }
    }
}

impl<W: Write> CartView for ConsoleView<W> {
    fn confirm(&mut self, message: &str) {
        self.emit(message);
    }

    fn show_cart(&mut self, page: &CartPage) {
        if page.is_empty {
            self.emit("Seu carrinho está vazio.");
        } else {
            let html = page.items_html.trim_end().to_string();
            self.emit(&html);
        }
        let summary = format!(
            "Subtotal: {}\nDesconto: {}\nTotal: {}",
            page.subtotal, page.discount, page.total
        );
        self.emit(&summary);
    }

    fn show_badge(&mut self, badge: Option<Badge>) {
        match badge {
            Some(badge) => self.emit(&badge.to_html()),
            None => self.emit("Itens no carrinho: 0"),
        }
    }
}
