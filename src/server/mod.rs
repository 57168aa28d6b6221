//! Server selection.
//!
//! # Responsibilities
//! - Name the API root a request targets
//! - Provide the well-known WeChat Pay gateways
//! - Accept validated operator-supplied roots
//!
//! # Design Decisions
//! - The resolver only sees `ServerContext::domain()`; it never stores contexts
//! - Plain strings are contexts too, validated at resolve time

pub mod context;

pub use context::{CustomServer, Server, ServerContext, UnknownServer, WeChatServer};
