pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod render;

use std::io::Stdout;

pub use application::{CartService, Page};
pub use config::CartConfig;
pub use domain::catalog::Catalog;
pub use domain::errors::DomainError;
pub use infrastructure::FileStore;
pub use render::ConsoleView;

/// Service wired the way the `ticket-cart` binary runs it: file-backed storage
/// and terminal output.
pub fn build_service(config: &CartConfig) -> CartService<FileStore, ConsoleView<Stdout>> {
    CartService::new(
        FileStore::new(&config.store_path),
        Catalog::standard(),
        ConsoleView::new(std::io::stdout()),
    )
}
