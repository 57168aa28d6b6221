//! HTTP boundary.
//!
//! # Data Flow
//! ```text
//! ResolvedTarget (verb + fully bound URI)
//!     → request.rs (reqwest::Request, unsigned, no body)
//!     → caller signs, attaches body, sends
//! ```

pub mod request;

pub use request::{build_request, RequestError};
