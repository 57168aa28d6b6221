//! Resolver error definitions.

use thiserror::Error;

/// Errors raised while binding a server domain into a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The server context produced an empty domain.
    #[error("server domain is empty")]
    EmptyDomain,

    /// The domain contains a character that would corrupt the template.
    #[error("server domain '{domain}' contains forbidden character {ch:?}")]
    ForbiddenCharacter { domain: String, ch: char },

    /// Templates already start their path with '/'.
    #[error("server domain '{domain}' must not end with '/'")]
    TrailingSlash { domain: String },

    /// The domain does not parse as an absolute URL.
    #[error("server domain '{domain}' is not an absolute URL: {source}")]
    NotAbsolute {
        domain: String,
        source: url::ParseError,
    },

    #[error("server domain '{domain}' uses unsupported scheme '{scheme}'")]
    UnsupportedScheme { domain: String, scheme: String },

    /// The domain carries a path, query or fragment of its own.
    #[error("server domain '{domain}' must be a bare origin without path, query or fragment")]
    UnexpectedComponent { domain: String },
}

/// Errors raised while binding path parameters into a templated URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// A placeholder in the template has no value.
    #[error("missing value for path parameter '{0}'")]
    MissingParam(String),

    /// A value was supplied for a name the template does not contain.
    #[error("path parameter '{0}' does not appear in the template")]
    UnknownParam(String),

    /// The value is empty or contains characters that need escaping.
    #[error("invalid value {value:?} for path parameter '{name}'")]
    InvalidParamValue { name: String, value: String },
}

/// Result type for domain resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResolveError::TrailingSlash {
            domain: "https://a.b/".to_string(),
        };
        assert_eq!(err.to_string(), "server domain 'https://a.b/' must not end with '/'");

        let err = ExpandError::MissingParam("stock_id".to_string());
        assert!(err.to_string().contains("stock_id"));
    }
}
