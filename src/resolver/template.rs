//! Templated and fully resolved URIs.
//!
//! # Responsibilities
//! - Scan `{name}` placeholders out of a template
//! - Hold a domain-bound URI whose path parameters are still open
//! - Bind path parameters, producing a URI with nothing left to fill
//!
//! # Design Decisions
//! - `TemplatedUri` and `ResolvedUri` are distinct types so an unexpanded
//!   placeholder cannot be dispatched by accident
//! - Values are checked, not escaped: anything outside the unreserved set is
//!   rejected rather than silently encoded

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

use crate::resolver::types::ExpandError;

/// Characters allowed in a path parameter value besides ASCII alphanumerics.
const VALUE_PUNCTUATION: &[char] = &['-', '_', '.', '~', '|', '*', '@'];

/// Iterator over placeholder names in a template, in order.
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find('{')?;
        let after = &self.rest[start + 1..];
        let end = after.find('}')?;
        self.rest = &after[end + 1..];
        Some(&after[..end])
    }
}

/// Placeholder names in `template`, e.g. `["openid", "coupon_id"]`.
pub fn placeholders(template: &str) -> Placeholders<'_> {
    Placeholders { rest: template }
}

/// Values for path-parameter placeholders, keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// A URI with its domain bound and its path parameters still templated.
///
/// Only the resolver constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TemplatedUri(String);

impl TemplatedUri {
    pub(crate) fn new(uri: String) -> Self {
        Self(uri)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Placeholder names still to be filled, in order.
    pub fn path_params(&self) -> Vec<&str> {
        placeholders(&self.0).collect()
    }

    /// Bind every placeholder from `params`.
    ///
    /// Fails if a placeholder has no value, if `params` names something the
    /// template does not contain, or if a value is not URI-safe.
    pub fn expand(&self, params: &PathParams) -> Result<ResolvedUri, ExpandError> {
        let expected = self.path_params();
        if let Some(unknown) = params.names().find(|name| !expected.contains(name)) {
            return Err(ExpandError::UnknownParam(unknown.to_string()));
        }

        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                break;
            };
            let name = &after[..end];
            let value = params
                .get(name)
                .ok_or_else(|| ExpandError::MissingParam(name.to_string()))?;
            check_value(name, value)?;

            out.push_str(&rest[..start]);
            out.push_str(value);
            rest = &after[end + 1..];
        }
        out.push_str(rest);

        Ok(ResolvedUri(out))
    }
}

impl fmt::Display for TemplatedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_value(name: &str, value: &str) -> Result<(), ExpandError> {
    // "." and ".." would become dot segments and move the request elsewhere.
    let safe = !matches!(value, "" | "." | "..")
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || VALUE_PUNCTUATION.contains(&c));
    if safe {
        Ok(())
    } else {
        Err(ExpandError::InvalidParamValue {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

/// A URI with nothing left to substitute, ready for a request builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResolvedUri(String);

impl ResolvedUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.0)
    }
}

impl fmt::Display for ResolvedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templated(uri: &str) -> TemplatedUri {
        TemplatedUri::new(uri.to_string())
    }

    #[test]
    fn test_placeholders_in_order() {
        let names: Vec<_> =
            placeholders("%s/v3/marketing/favor/users/{openid}/coupons/{coupon_id}").collect();
        assert_eq!(names, vec!["openid", "coupon_id"]);
        assert_eq!(placeholders("%s/v3/certificates").count(), 0);
    }

    #[test]
    fn test_expand_fills_all_placeholders() {
        let uri = templated("https://api.mch.weixin.qq.com/v3/transfer/batches/batch-id/{batch_id}/details/detail-id/{detail_id}");
        let params = PathParams::new()
            .with("batch_id", "1030000071100999991182020050700019480001")
            .with("detail_id", "1040000071100999991182020050700019500100");
        let resolved = uri.expand(&params).unwrap();
        assert_eq!(
            resolved.as_str(),
            "https://api.mch.weixin.qq.com/v3/transfer/batches/batch-id/1030000071100999991182020050700019480001/details/detail-id/1040000071100999991182020050700019500100"
        );
        assert!(resolved.to_url().is_ok());
    }

    #[test]
    fn test_expand_query_style_template() {
        let uri = templated("https://api.mch.weixin.qq.com/v3/payscore/user-service-state?service_id={service_id}&appid={appid}&openid={openid}");
        let params: PathParams = [("service_id", "500001"), ("appid", "wxd678efh567hg6787"), ("openid", "oUpF8uMuAJO_M2pxb1Q9zNjWeS6o")]
            .into_iter()
            .collect();
        let url = uri.expand(&params).unwrap().to_url().unwrap();
        assert_eq!(url.path(), "/v3/payscore/user-service-state");
        assert_eq!(
            url.query(),
            Some("service_id=500001&appid=wxd678efh567hg6787&openid=oUpF8uMuAJO_M2pxb1Q9zNjWeS6o")
        );
    }

    #[test]
    fn test_expand_without_placeholders() {
        let uri = templated("https://api.mch.weixin.qq.com/v3/certificates");
        let resolved = uri.expand(&PathParams::new()).unwrap();
        assert_eq!(resolved.as_str(), uri.as_str());
    }

    #[test]
    fn test_expand_missing_param() {
        let uri = templated("https://a.b/v3/pay/transactions/out-trade-no/{out_trade_no}/close");
        assert_eq!(
            uri.expand(&PathParams::new()),
            Err(ExpandError::MissingParam("out_trade_no".to_string()))
        );
    }

    #[test]
    fn test_expand_dot_segment_keeps_endpoint() {
        let uri = templated("https://api.mch.weixin.qq.com/v3/pay/transactions/out-trade-no/{out_trade_no}/close");
        let params = PathParams::new().with("out_trade_no", "..");
        assert_eq!(
            uri.expand(&params),
            Err(ExpandError::InvalidParamValue {
                name: "out_trade_no".to_string(),
                value: "..".to_string(),
            })
        );
    }

    #[test]
    fn test_expand_unknown_param() {
        let uri = templated("https://a.b/v3/certificates");
        let params = PathParams::new().with("out_trade_no", "123");
        assert_eq!(
            uri.expand(&params),
            Err(ExpandError::UnknownParam("out_trade_no".to_string()))
        );
    }

    #[test]
    fn test_expand_rejects_unsafe_values() {
        let uri = templated("https://a.b/v3/refund/domestic/refunds/{out_refund_no}");
        for bad in ["", ".", "..", "a/b", "a b", "a?b", "{x}", "%2F", "退款"] {
            let params = PathParams::new().with("out_refund_no", bad);
            assert!(
                matches!(uri.expand(&params), Err(ExpandError::InvalidParamValue { .. })),
                "{:?} should be rejected",
                bad
            );
        }
        let params = PathParams::new().with("out_refund_no", "...");
        assert!(uri.expand(&params).is_ok());
        let params = PathParams::new().with("out_refund_no", "R-2024_01.a~b|c*d@e");
        assert!(uri.expand(&params).is_ok());
    }
}
