//! Server contexts: where a request is aimed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resolver::resolve::validate_domain;
use crate::resolver::types::ResolveError;

/// Anything that can name the API root a request should target.
///
/// Implementations hand out the domain verbatim; the resolver validates it.
pub trait ServerContext {
    /// The API root, e.g. `https://api.mch.weixin.qq.com`.
    fn domain(&self) -> &str;
}

impl ServerContext for str {
    fn domain(&self) -> &str {
        self
    }
}

impl ServerContext for String {
    fn domain(&self) -> &str {
        self.as_str()
    }
}

impl<T: ServerContext + ?Sized> ServerContext for &T {
    fn domain(&self) -> &str {
        (**self).domain()
    }
}

/// The WeChat Pay gateways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeChatServer {
    /// Primary mainland gateway.
    #[default]
    China,
    /// Mainland backup gateway.
    China2,
    /// Overseas gateway (US).
    Us,
    /// Overseas gateway (Hong Kong).
    Hk,
}

impl WeChatServer {
    pub const ALL: [WeChatServer; 4] = [
        WeChatServer::China,
        WeChatServer::China2,
        WeChatServer::Us,
        WeChatServer::Hk,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            WeChatServer::China => "china",
            WeChatServer::China2 => "china2",
            WeChatServer::Us => "us",
            WeChatServer::Hk => "hk",
        }
    }

    pub const fn domain(&self) -> &'static str {
        match self {
            WeChatServer::China => "https://api.mch.weixin.qq.com",
            WeChatServer::China2 => "https://api2.mch.weixin.qq.com",
            WeChatServer::Us => "https://apius.mch.weixin.qq.com",
            WeChatServer::Hk => "https://apihk.mch.weixin.qq.com",
        }
    }
}

impl ServerContext for WeChatServer {
    fn domain(&self) -> &str {
        WeChatServer::domain(self)
    }
}

impl fmt::Display for WeChatServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a gateway name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown server '{0}', expected one of: china, china2, us, hk")]
pub struct UnknownServer(pub String);

impl FromStr for WeChatServer {
    type Err = UnknownServer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        WeChatServer::ALL
            .into_iter()
            .find(|server| server.as_str() == wanted)
            .ok_or_else(|| UnknownServer(s.to_string()))
    }
}

/// An operator-supplied API root, e.g. a sandbox or an egress proxy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomServer {
    domain: String,
}

impl CustomServer {
    /// Accept `domain` after checking it is a bare absolute http(s) origin.
    pub fn parse(domain: impl Into<String>) -> Result<Self, ResolveError> {
        let domain = domain.into();
        validate_domain(&domain)?;
        Ok(Self { domain })
    }
}

impl ServerContext for CustomServer {
    fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for CustomServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.domain)
    }
}

/// Either a known gateway or a custom root; what configuration selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Server {
    WeChat(WeChatServer),
    Custom(CustomServer),
}

impl Default for Server {
    fn default() -> Self {
        Server::WeChat(WeChatServer::default())
    }
}

impl ServerContext for Server {
    fn domain(&self) -> &str {
        match self {
            Server::WeChat(server) => WeChatServer::domain(server),
            Server::Custom(server) => server.domain(),
        }
    }
}

impl From<WeChatServer> for Server {
    fn from(server: WeChatServer) -> Self {
        Server::WeChat(server)
    }
}

impl From<CustomServer> for Server {
    fn from(server: CustomServer) -> Self {
        Server::Custom(server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_gateways_are_valid_domains() {
        for server in WeChatServer::ALL {
            assert!(validate_domain(WeChatServer::domain(&server)).is_ok(), "{}", server);
        }
    }

    #[test]
    fn test_server_from_str() {
        assert_eq!("CHINA2".parse::<WeChatServer>().unwrap(), WeChatServer::China2);
        assert_eq!(" hk ".parse::<WeChatServer>().unwrap(), WeChatServer::Hk);
        assert_eq!(
            "mars".parse::<WeChatServer>(),
            Err(UnknownServer("mars".to_string()))
        );
    }

    #[test]
    fn test_default_server_is_china() {
        assert_eq!(Server::default().domain(), "https://api.mch.weixin.qq.com");
    }

    #[test]
    fn test_custom_server_validates() {
        let server = CustomServer::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(server.domain(), "http://127.0.0.1:8080");
        assert_eq!(CustomServer::parse(""), Err(ResolveError::EmptyDomain));
        assert!(CustomServer::parse("api.mch.weixin.qq.com").is_err());
    }

    #[test]
    fn test_str_is_a_context() {
        let domain = "https://example.com";
        assert_eq!(ServerContext::domain(domain), domain);
        assert_eq!(ServerContext::domain(&domain.to_string()), domain);
    }
}
