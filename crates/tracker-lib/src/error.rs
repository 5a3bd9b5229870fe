//! Error types for `tracker-lib`.

use thiserror::Error;

/// Primary error type for tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Issue with the specified ID was not found (or is soft-deleted).
    #[error("Issue not found: {id}")]
    NotFound { id: String },

    /// Referenced deportment does not exist in the catalog.
    #[error("Unknown deportment: {category_id}")]
    InvalidReference { category_id: String },

    /// Unsupported sort field.
    #[error("Unsupported sort field: {field}")]
    InvalidSortField { field: String },

    /// Page numbers are 1-based.
    #[error("Page must be >= 1, got: {page}")]
    InvalidPage { page: u32 },

    /// Page size must be positive.
    #[error("Per-page must be >= 1, got: {per_page}")]
    InvalidPerPage { per_page: u32 },

    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl TrackerError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error maps to a missing-resource outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type using `TrackerError`.
pub type Result<T> = std::result::Result<T, TrackerError>;
