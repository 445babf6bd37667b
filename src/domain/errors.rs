use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Ticket not found: {0}")]
    UnknownItem(String),
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Render error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<askama::Error> for DomainError {
    fn from(e: askama::Error) -> Self {
        DomainError::Render(e.to_string())
    }
}
