pub mod cart_store;
pub mod file_store;
pub mod memory;
pub mod web_storage;

pub use cart_store::{CartStore, CART_STORAGE_KEY};
pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use web_storage::WebStorage;
