//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::resolver::ResolveError;
use crate::server::{CustomServer, Server, WeChatServer};

/// Root configuration for the endpoint client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Which API root requests are aimed at.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Server selection.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Known gateway to use (china, china2, us, hk).
    pub region: WeChatServer,

    /// Custom API root; takes precedence over `region` when set.
    pub domain: Option<String>,
}

impl ServerConfig {
    /// The server context this configuration selects.
    pub fn selection(&self) -> Result<Server, ResolveError> {
        match &self.domain {
            Some(domain) => CustomServer::parse(domain.as_str()).map(Server::Custom),
            None => Ok(Server::WeChat(self.region)),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter: a level (trace, debug, info, warn, error) or an
    /// `EnvFilter` directive such as `wechatpay_endpoints=debug`.
    pub log_level: String,

    /// Colored output.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ansi: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerContext;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.server.region, WeChatServer::China);
        assert!(config.server.domain.is_none());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_custom_domain_wins_over_region() {
        let config = ServerConfig {
            region: WeChatServer::Hk,
            domain: Some("http://127.0.0.1:3000".to_string()),
        };
        assert_eq!(config.selection().unwrap().domain(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_region_selection() {
        let config = ServerConfig {
            region: WeChatServer::Us,
            domain: None,
        };
        assert_eq!(config.selection().unwrap(), Server::WeChat(WeChatServer::Us));
    }
}
