use super::errors::DomainError;

/// String key-value storage, the shape of the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}
