//! Request construction.
//!
//! # Responsibilities
//! - Turn a fully resolved target into an unsigned `reqwest::Request`
//! - Map the catalog verb onto the HTTP method
//!
//! # Design Decisions
//! - Only `ResolvedTarget` is accepted; templated URIs cannot reach the wire
//! - Nothing is sent: signing, body and transport belong to the caller
//! - `Accept: application/json` is set since every v3 response is JSON

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, Request};
use thiserror::Error;

use crate::resolver::ResolvedTarget;

/// Errors raised while building a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The resolved URI is not a valid URL.
    #[error("invalid request URL '{uri}': {source}")]
    Url {
        uri: String,
        source: url::ParseError,
    },

    #[error("failed to build request: {0}")]
    Build(#[from] reqwest::Error),
}

/// Build an unsigned request for `target`.
pub fn build_request(client: &Client, target: &ResolvedTarget) -> Result<Request, RequestError> {
    let url = target.uri.to_url().map_err(|source| RequestError::Url {
        uri: target.uri.to_string(),
        source,
    })?;

    let request = client
        .request(target.verb.into(), url)
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .build()?;

    tracing::debug!(
        endpoint = %target.endpoint,
        method = %request.method(),
        url = %request.url(),
        "Request built"
    );
    Ok(request)
}
