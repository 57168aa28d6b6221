//! Endpoint catalog.
//!
//! # Data Flow
//! ```text
//! symbolic name ("CLOSE")
//!     → endpoint.rs (lookup / FromStr)
//!     → Endpoint { verb, template, group }
//!     → resolver (domain binding)
//! ```
//!
//! # Design Decisions
//! - Closed enum: the set of valid names is the type
//! - Table is compile-time constant data, no initialization or locking
//! - Groups are organizational only

pub mod endpoint;
pub mod group;
pub mod types;
pub mod verb;

pub use endpoint::{lookup, Endpoint, EndpointSummary, DOMAIN_PLACEHOLDER};
pub use group::EndpointGroup;
pub use types::{CatalogError, CatalogResult};
pub use verb::HttpVerb;

/// Verb of the endpoint named `name`.
pub fn verb(name: &str) -> CatalogResult<HttpVerb> {
    lookup(name).map(|endpoint| endpoint.verb())
}

/// Template of the endpoint named `name`.
pub fn template(name: &str) -> CatalogResult<&'static str> {
    lookup(name).map(|endpoint| endpoint.template())
}
