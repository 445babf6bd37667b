//! `window.localStorage` adapter.
//!
//! Only does real work on `wasm32`. Elsewhere there is no browser, so reads
//! find nothing and writes are dropped.

use crate::domain::errors::DomainError;
use crate::domain::ports::KeyValueStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, DomainError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| DomainError::Storage(format!("localStorage getItem failed: {e:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| DomainError::Storage(format!("localStorage setItem failed: {e:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}
