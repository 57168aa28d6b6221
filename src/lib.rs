//! WeChat Pay v3 endpoint catalog and URI resolution.
//!
//! ```text
//! Endpoint::Close ──┐
//!                   ├─▶ resolve() ─▶ RequestTarget ─▶ expand() ─▶ ResolvedTarget ─▶ build_request()
//! ServerContext ────┘     (domain)    {out_trade_no}    (params)     fully bound       (unsigned)
//! ```

pub mod catalog;
pub mod config;
pub mod http;
pub mod observability;
pub mod resolver;
pub mod server;

pub use catalog::{lookup, CatalogError, Endpoint, EndpointGroup, HttpVerb};
pub use config::ClientConfig;
pub use resolver::{resolve, PathParams, RequestTarget, ResolveError, ResolvedTarget};
pub use server::{CustomServer, Server, ServerContext, WeChatServer};
