//! Landing page service error types.

use thiserror::Error;

use launchkit_core::{DraftError, EmailError};

use crate::db::RepositoryError;

/// Errors that can occur during landing page operations.
#[derive(Debug, Error)]
pub enum PageServiceError {
    /// Submitted fields failed validation. Nothing was written.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No page has the requested slug.
    #[error("landing page not found: {0}")]
    NotFound(String),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<DraftError> for PageServiceError {
    fn from(err: DraftError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<EmailError> for PageServiceError {
    fn from(err: EmailError) -> Self {
        Self::Validation(err.to_string())
    }
}
