//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! resolver / http / config produce:
//!     → tracing events (endpoint, verb, domain)
//!     → logging.rs (subscriber installed by the binary)
//!     → stderr
//! ```

pub mod logging;

pub use logging::init_logging;
