//! Domain binding.
//!
//! # Responsibilities
//! - Validate the server context's domain
//! - Replace the template's domain placeholder with it
//! - Hand back the verb plus the templated URI
//!
//! # Design Decisions
//! - Plain token replacement; the domain is never used as a format string
//! - Malformed domains fail here instead of producing a broken URI
//! - Pure: no caching, no shared state

use serde::Serialize;
use url::Url;

use crate::catalog::{Endpoint, HttpVerb, DOMAIN_PLACEHOLDER};
use crate::resolver::template::{PathParams, ResolvedUri, TemplatedUri};
use crate::resolver::types::{ExpandError, ResolveError, ResolveResult};
use crate::server::ServerContext;

/// Outcome of domain binding: verb plus a URI with path parameters open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestTarget {
    pub endpoint: Endpoint,
    pub verb: HttpVerb,
    pub uri: TemplatedUri,
}

impl RequestTarget {
    /// Second phase: bind the path parameters.
    pub fn expand(&self, params: &PathParams) -> Result<ResolvedTarget, ExpandError> {
        let uri = self.uri.expand(params)?;
        tracing::trace!(endpoint = %self.endpoint, uri = %uri, "Path parameters bound");
        Ok(ResolvedTarget {
            endpoint: self.endpoint,
            verb: self.verb,
            uri,
        })
    }
}

/// A request target with nothing left to substitute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    pub endpoint: Endpoint,
    pub verb: HttpVerb,
    pub uri: ResolvedUri,
}

/// Bind `server`'s domain into `endpoint`'s template.
pub fn resolve<C: ServerContext + ?Sized>(
    endpoint: Endpoint,
    server: &C,
) -> ResolveResult<RequestTarget> {
    let domain = server.domain();
    if let Err(e) = validate_domain(domain) {
        tracing::debug!(endpoint = %endpoint, error = %e, "Rejected server domain");
        return Err(e);
    }

    let uri = endpoint.template().replacen(DOMAIN_PLACEHOLDER, domain, 1);
    tracing::trace!(endpoint = %endpoint, verb = %endpoint.verb(), domain, "Endpoint resolved");

    Ok(RequestTarget {
        endpoint,
        verb: endpoint.verb(),
        uri: TemplatedUri::new(uri),
    })
}

impl Endpoint {
    /// Shorthand for [`resolve`] when only the URI is needed.
    pub fn uri<C: ServerContext + ?Sized>(&self, server: &C) -> ResolveResult<TemplatedUri> {
        resolve(*self, server).map(|target| target.uri)
    }
}

/// Check that `domain` is a bare absolute http(s) origin.
///
/// Empty strings are rejected: a template bound to an empty domain would
/// yield a host-less `/v3/...` path.
pub fn validate_domain(domain: &str) -> ResolveResult<()> {
    if domain.is_empty() {
        return Err(ResolveError::EmptyDomain);
    }

    if let Some(ch) = domain
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '%' | '{' | '}' | '\\'))
    {
        return Err(ResolveError::ForbiddenCharacter {
            domain: domain.to_string(),
            ch,
        });
    }

    if domain.ends_with('/') {
        return Err(ResolveError::TrailingSlash {
            domain: domain.to_string(),
        });
    }

    let url = Url::parse(domain).map_err(|source| ResolveError::NotAbsolute {
        domain: domain.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ResolveError::UnsupportedScheme {
            domain: domain.to_string(),
            scheme: url.scheme().to_string(),
        });
    }

    // The parsed URL is normalized (`/.` and `/..` collapse to `/`), so the
    // authority is checked on the raw string as well.
    let authority = domain.split_once("://").map(|(_, rest)| rest);
    let bare = matches!(authority, Some(rest) if !rest.contains(['/', '?', '#']));
    if !bare || url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(ResolveError::UnexpectedComponent {
            domain: domain.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::WeChatServer;

    const CHINA: &str = "https://api.mch.weixin.qq.com";

    #[test]
    fn test_resolve_close() {
        let target = resolve(Endpoint::Close, CHINA).unwrap();
        assert_eq!(target.verb, HttpVerb::Post);
        assert_eq!(
            target.uri.as_str(),
            "https://api.mch.weixin.qq.com/v3/pay/transactions/out-trade-no/{out_trade_no}/close"
        );
    }

    #[test]
    fn test_resolve_cert_has_no_placeholders() {
        let target = resolve(Endpoint::Cert, &WeChatServer::China).unwrap();
        assert_eq!(target.verb, HttpVerb::Get);
        assert_eq!(target.uri.as_str(), "https://api.mch.weixin.qq.com/v3/certificates");
        assert!(target.uri.path_params().is_empty());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let first = resolve(Endpoint::MarketingBusiFavorUserCoupon, CHINA).unwrap();
        let second = resolve(Endpoint::MarketingBusiFavorUserCoupon, CHINA).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_domain_is_rejected() {
        assert_eq!(resolve(Endpoint::Cert, ""), Err(ResolveError::EmptyDomain));
    }

    #[test]
    fn test_domain_with_format_characters_is_rejected() {
        let err = resolve(Endpoint::Cert, "https://%s.example.com").unwrap_err();
        assert!(matches!(err, ResolveError::ForbiddenCharacter { ch: '%', .. }));

        let err = resolve(Endpoint::Cert, "https://{host}").unwrap_err();
        assert!(matches!(err, ResolveError::ForbiddenCharacter { ch: '{', .. }));
    }

    #[test]
    fn test_dot_segment_domain_is_rejected() {
        let err = resolve(Endpoint::Cert, "https://api.mch.weixin.qq.com/..").unwrap_err();
        assert!(matches!(err, ResolveError::UnexpectedComponent { .. }));
    }

    #[test]
    fn test_validate_domain_cases() {
        assert!(validate_domain(CHINA).is_ok());
        assert!(validate_domain("http://localhost:9000").is_ok());

        assert!(matches!(
            validate_domain("https://api.mch.weixin.qq.com/"),
            Err(ResolveError::TrailingSlash { .. })
        ));
        assert!(matches!(
            validate_domain("api.mch.weixin.qq.com"),
            Err(ResolveError::NotAbsolute { .. })
        ));
        assert!(matches!(
            validate_domain("ftp://api.mch.weixin.qq.com"),
            Err(ResolveError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            validate_domain("https://api.mch.weixin.qq.com/v3"),
            Err(ResolveError::UnexpectedComponent { .. })
        ));
        assert!(matches!(
            validate_domain("https://api.mch.weixin.qq.com?x=1"),
            Err(ResolveError::UnexpectedComponent { .. })
        ));
        for dotted in ["https://api.mch.weixin.qq.com/.", "https://api.mch.weixin.qq.com/.."] {
            assert!(
                matches!(validate_domain(dotted), Err(ResolveError::UnexpectedComponent { .. })),
                "{} should be rejected",
                dotted
            );
        }
        assert!(matches!(
            validate_domain("https:api.mch.weixin.qq.com"),
            Err(ResolveError::UnexpectedComponent { .. })
        ));
        assert!(matches!(
            validate_domain("https://api.mch.weixin.qq.com\\"),
            Err(ResolveError::ForbiddenCharacter { ch: '\\', .. })
        ));
        assert!(matches!(
            validate_domain(" https://api.mch.weixin.qq.com"),
            Err(ResolveError::ForbiddenCharacter { ch: ' ', .. })
        ));
    }

    #[test]
    fn test_two_phase_resolution() {
        let target = resolve(Endpoint::MarketingFavorUsersCouponsDetail, CHINA).unwrap();
        assert_eq!(target.uri.path_params(), vec!["openid", "coupon_id"]);

        let params = PathParams::new()
            .with("openid", "o4GgauInH_RCEdvrrNGrntXDu6D4")
            .with("coupon_id", "9856888");
        let resolved = target.expand(&params).unwrap();
        assert_eq!(resolved.verb, HttpVerb::Get);
        assert_eq!(
            resolved.uri.as_str(),
            "https://api.mch.weixin.qq.com/v3/marketing/favor/users/o4GgauInH_RCEdvrrNGrntXDu6D4/coupons/9856888"
        );
    }

    #[test]
    fn test_endpoint_uri_shorthand() {
        let uri = Endpoint::SmartGuidesModify.uri(&WeChatServer::Hk).unwrap();
        assert_eq!(uri.as_str(), "https://apihk.mch.weixin.qq.com/v3/smartguide/guides/{guide_id}");
    }
}
