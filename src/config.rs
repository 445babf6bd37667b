use std::env;
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = ".ticket-cart/storage.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// File backing the local key-value store (`CART_STORE_PATH`).
    pub store_path: PathBuf,
}

impl CartConfig {
    /// Reads configuration from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_path = lookup("CART_STORE_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
        Self {
            store_path: PathBuf::from(store_path),
        }
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_path_defaults_when_unset_or_blank() {
        assert_eq!(
            CartConfig::default().store_path,
            PathBuf::from(DEFAULT_STORE_PATH)
        );
        let blank = CartConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(blank.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    }

    #[test]
    fn store_path_comes_from_environment_key() {
        let config = CartConfig::from_lookup(|key| {
            (key == "CART_STORE_PATH").then(|| "/tmp/cart.json".to_string())
        });
        assert_eq!(config.store_path, PathBuf::from("/tmp/cart.json"));
    }
}
