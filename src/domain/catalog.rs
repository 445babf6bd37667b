//! The fixed list of ticket types offered by the storefront.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unit_price: BigDecimal,
}

/// (id, name, description, unit price in centavos)
const STANDARD_TICKETS: [(&str, &str, &str, i64); 3] = [
    (
        "individual",
        "Ingresso Individual",
        "Para visitantes acima de 12 anos",
        50_00,
    ),
    (
        "infantil",
        "Ingresso Infantil",
        "Crianças de 3 a 12 anos",
        25_00,
    ),
    (
        "familia",
        "Ingresso Família",
        "2 adultos + 2 crianças",
        130_00,
    ),
];

/// Immutable, insertion-ordered set of [`CatalogItem`]s with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// The compiled-in ticket catalog.
    pub fn standard() -> Self {
        let items = STANDARD_TICKETS
            .iter()
            .map(|&(id, name, description, cents)| CatalogItem {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                unit_price: BigDecimal::new(BigInt::from(cents), 2),
            })
            .collect();
        Self { items }
    }

    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}
