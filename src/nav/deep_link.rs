//! External URI handling.
//!
//! Deep links arrive as `app://<host>/<path>` URIs. Parsing only strips the
//! scheme and host; the resulting path goes through the same registry
//! matching as any in-app navigation, so argument binding and type checks
//! are shared with normal routes.

use crate::nav::error::NavError;
use url::Url;

/// Accepted scheme/host pair for external URIs
#[derive(Debug, Clone, PartialEq)]
pub struct DeepLinkSpec {
    scheme: String,
    host: String,
}

impl DeepLinkSpec {
    pub fn new(scheme: &str, host: &str) -> Self {
        Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
        }
    }

    /// Map an external URI to a concrete navigation path.
    ///
    /// `app://finance/account/checking` becomes `account/checking`.
    pub fn parse(&self, uri: &str) -> Result<String, NavError> {
        let bad = |reason: String| NavError::BadDeepLink {
            uri: uri.to_string(),
            reason,
        };

        let url = Url::parse(uri).map_err(|e| bad(e.to_string()))?;

        if url.scheme() != self.scheme {
            return Err(bad(format!(
                "scheme '{}' is not '{}'",
                url.scheme(),
                self.scheme
            )));
        }
        match url.host_str() {
            Some(host) if host == self.host => {}
            Some(host) => return Err(bad(format!("host '{}' is not '{}'", host, self.host))),
            None => return Err(bad("missing host".to_string())),
        }

        let path = url.path().trim_start_matches('/');
        if path.is_empty() {
            return Err(bad("missing path".to_string()));
        }
        Ok(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> DeepLinkSpec {
        DeepLinkSpec::new("app", "finance")
    }

    #[test]
    fn test_parses_account_link() {
        let path = spec().parse("app://finance/account/checking").unwrap();
        assert_eq!(path, "account/checking");
    }

    #[test]
    fn test_rejects_wrong_scheme() {
        let err = spec().parse("http://finance/account/checking").unwrap_err();
        assert!(matches!(err, NavError::BadDeepLink { .. }));
    }

    #[test]
    fn test_rejects_wrong_host() {
        let err = spec().parse("app://mail/account/checking").unwrap_err();
        assert!(matches!(err, NavError::BadDeepLink { .. }));
    }

    #[test]
    fn test_rejects_missing_path() {
        assert!(spec().parse("app://finance").is_err());
        assert!(spec().parse("app://finance/").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(spec().parse("not a uri at all").is_err());
    }
}
