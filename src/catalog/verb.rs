//! HTTP verbs used by the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The HTTP method an endpoint is bound to.
///
/// The upstream API only uses these three; anything else is not part of the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Patch,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpVerb> for reqwest::Method {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => reqwest::Method::GET,
            HttpVerb::Post => reqwest::Method::POST,
            HttpVerb::Patch => reqwest::Method::PATCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_display_matches_method() {
        for verb in [HttpVerb::Get, HttpVerb::Post, HttpVerb::Patch] {
            let method: reqwest::Method = verb.into();
            assert_eq!(verb.to_string(), method.as_str());
        }
    }

    #[test]
    fn test_verb_serde_is_uppercase() {
        assert_eq!(serde_json::to_string(&HttpVerb::Patch).unwrap(), "\"PATCH\"");
        let verb: HttpVerb = serde_json::from_str("\"GET\"").unwrap();
        assert_eq!(verb, HttpVerb::Get);
    }
}
