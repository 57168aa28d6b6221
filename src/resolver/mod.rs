//! URI resolution.
//!
//! # Data Flow
//! ```text
//! Endpoint + ServerContext
//!     → resolve.rs (validate domain, replace placeholder)
//!     → RequestTarget { verb, TemplatedUri }
//!     → template.rs (bind path parameters)
//!     → ResolvedTarget { verb, ResolvedUri }
//!     → downstream request builder
//! ```
//!
//! # Design Decisions
//! - Two explicit phases with two URI types
//! - Domain binding never escapes; path binding never escapes either, it rejects
//! - No I/O, no state, safe to call from any thread

pub mod resolve;
pub mod template;
pub mod types;

pub use resolve::{resolve, validate_domain, RequestTarget, ResolvedTarget};
pub use template::{placeholders, PathParams, ResolvedUri, TemplatedUri};
pub use types::{ExpandError, ResolveError, ResolveResult};
