//! Catalog error definitions.

use thiserror::Error;

/// Errors raised when a request kind is addressed by name.
///
/// Typed callers hold an [`Endpoint`](crate::catalog::Endpoint) and never
/// see these; they only surface for names arriving as strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The name is not a member of the catalog.
    #[error("unknown endpoint: {0}")]
    NotFound(String),

    /// The group name does not match any catalog group.
    #[error("unknown endpoint group: {0}")]
    UnknownGroup(String),
}

/// Result type for catalog lookups.
pub type CatalogResult<T> = Result<T, CatalogError>;
