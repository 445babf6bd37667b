use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnknownItem(id) => AppError::NotFound(format!("ticket {:?}", id)),
            DomainError::InvalidQuantity(_) => AppError::InvalidInput(e.to_string()),
            DomainError::Storage(msg) | DomainError::Render(msg) => AppError::Internal(msg),
        }
    }
}

impl AppError {
    /// Process exit status for the command-line host.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Internal(_) => 1,
            AppError::NotFound(_) => 2,
            AppError::InvalidInput(_) => 3,
        }
    }
}
