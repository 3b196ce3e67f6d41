use thiserror::Error;

use crate::domain::book::value_objects::BookId;

/// Errors that can occur in the book catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Book not found: {0}")]
    NotFound(BookId),
}

impl CatalogError {
    /// Creates an `InvalidInput` error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
