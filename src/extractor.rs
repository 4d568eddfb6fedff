//! Registrable domain extraction.

use std::sync::Arc;

use serde_json::Value;
use url::Host;

use crate::error::{DomainatorError, Result};
use crate::extensions::{default_extensions, ExtensionSet};
use crate::types::UrlInput;

/// Extracts the registrable domain (one label plus a known extension) from URLs.
///
/// The extension set is shared through an `Arc` and never mutated, so an
/// extractor is cheap to clone and safe to use from many threads.
#[derive(Debug, Clone)]
pub struct DomainExtractor {
    extensions: Arc<ExtensionSet>,
}

impl Default for DomainExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainExtractor {
    /// Create an extractor using the default extension set
    pub fn new() -> Self {
        Self {
            extensions: Arc::clone(default_extensions()),
        }
    }

    /// Create an extractor using a caller-supplied extension set
    pub fn with_extensions(extensions: impl Into<Arc<ExtensionSet>>) -> Self {
        Self {
            extensions: extensions.into(),
        }
    }

    /// The extension set this extractor matches against
    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    /// Extract the registrable domain from a URL string or parsed URL.
    ///
    /// # Errors
    ///
    /// - [`DomainatorError::InvalidUri`] if text input is not a valid URL
    /// - [`DomainatorError::InvalidArgument`] if the URL has no host
    /// - [`DomainatorError::NotFound`] if the host ends in no known extension
    pub fn parse(&self, input: impl Into<UrlInput>) -> Result<String> {
        let url = input.into().into_url()?;

        let host = url.host_str().ok_or_else(|| {
            DomainatorError::InvalidArgument(format!("URL has no host: {}", url))
        })?;
        // IP literals have no registrable domain
        if matches!(url.host(), Some(Host::Ipv4(_) | Host::Ipv6(_))) {
            tracing::debug!(host = %host, "IP literal host");
            return Err(DomainatorError::NotFound {
                host: host.to_string(),
            });
        }

        let host = host.strip_suffix('.').unwrap_or(host).to_lowercase();
        tracing::trace!(host = %host, "extracted host");

        self.registrable_domain(&host)
    }

    /// Extract the registrable domain from a JSON value.
    ///
    /// Only JSON strings are accepted; any other value fails with
    /// [`DomainatorError::InvalidArgument`].
    pub fn try_parse_value(&self, value: &Value) -> Result<String> {
        self.parse(UrlInput::try_from(value)?)
    }

    fn registrable_domain(&self, host: &str) -> Result<String> {
        let Some(extension) = self.extensions.longest_match(host) else {
            tracing::debug!(host = %host, "no known extension");
            return Err(DomainatorError::NotFound {
                host: host.to_string(),
            });
        };

        // Keep the single label in front of the extension
        let prefix = &host[..host.len() - extension.len()];
        let start = prefix.rfind('.').map_or(0, |pos| pos + 1);
        let domain = &host[start..];

        tracing::debug!(host = %host, extension = %extension, domain = %domain, "matched extension");
        Ok(domain.to_string())
    }
}

/// Extract the registrable domain with a one-off extractor.
///
/// Uses `extensions` when given, otherwise the default set.
pub fn parse(input: impl Into<UrlInput>, extensions: Option<ExtensionSet>) -> Result<String> {
    let extractor = match extensions {
        Some(extensions) => DomainExtractor::with_extensions(extensions),
        None => DomainExtractor::new(),
    };
    extractor.parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use url::Url;

    fn uk_extractor() -> DomainExtractor {
        DomainExtractor::with_extensions(ExtensionSet::new([".uk", ".co.uk"]).unwrap())
    }

    #[test]
    fn test_parse_string() {
        let extractor = DomainExtractor::new();
        assert_eq!(
            extractor.parse("http://www.example.com/foo?x=y&y=z").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_parse_url() {
        let extractor = DomainExtractor::new();
        let url = Url::parse("http://www.example.com/foo?x=y&y=z").unwrap();
        assert_eq!(extractor.parse(&url).unwrap(), "example.com");
        assert_eq!(extractor.parse(url).unwrap(), "example.com");
    }

    #[test]
    fn test_longest_extension_wins() {
        let extractor = uk_extractor();
        assert_eq!(extractor.parse("http://www.example.co.uk").unwrap(), "example.co.uk");
        assert_eq!(extractor.parse("http://a.b.example.uk").unwrap(), "example.uk");
    }

    #[test]
    fn test_host_is_already_registrable() {
        let extractor = DomainExtractor::new();
        assert_eq!(extractor.parse("https://example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_host_equal_to_extension() {
        let extractor = uk_extractor();
        // "co.uk" itself registers under ".uk"
        assert_eq!(extractor.parse("http://co.uk").unwrap(), "co.uk");

        let err = extractor.parse("http://uk").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SuffixNotFound);
    }

    #[test]
    fn test_case_and_trailing_dot() {
        let extractor = DomainExtractor::new();
        assert_eq!(extractor.parse("HTTP://WWW.Example.COM/").unwrap(), "example.com");
        assert_eq!(extractor.parse("http://www.example.com./").unwrap(), "example.com");
    }

    #[test]
    fn test_unknown_extension() {
        let err = DomainExtractor::new()
            .parse("http://www.example.foo")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SuffixNotFound);
    }

    #[test]
    fn test_ip_host_not_found() {
        let err = DomainExtractor::new().parse("http://192.168.1.1/").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SuffixNotFound);
    }

    #[test]
    fn test_ip_host_ignores_numeric_extensions() {
        let extractor = DomainExtractor::with_extensions(ExtensionSet::new([".1"]).unwrap());

        let err = extractor.parse("http://192.168.1.1/").unwrap_err();
        match err {
            DomainatorError::NotFound { host } => assert_eq!(host, "192.168.1.1"),
            other => panic!("expected NotFound, got {:?}", other),
        }

        let err = extractor.parse("http://[2001:db8::1]/").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SuffixNotFound);
    }

    #[test]
    fn test_url_without_host() {
        let err = DomainExtractor::new()
            .parse("mailto:someone@example.com")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_unparseable() {
        let err = DomainExtractor::new().parse(":").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSyntax);
    }

    #[test]
    fn test_try_parse_value() {
        let extractor = DomainExtractor::new();
        let ok = serde_json::json!("https://news.example.org/a");
        assert_eq!(extractor.try_parse_value(&ok).unwrap(), "example.org");

        let err = extractor.try_parse_value(&serde_json::json!(42)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_default_uses_shared_defaults() {
        let extractor = DomainExtractor::default();
        assert_eq!(extractor.extensions(), &**default_extensions());
    }

    #[test]
    fn test_free_parse_delegates() {
        let url = "http://www.google.com";
        assert_eq!(parse(url, None).unwrap(), DomainExtractor::new().parse(url).unwrap());

        let extensions = ExtensionSet::new([".uk", ".co.uk"]).unwrap();
        let err = parse(url, Some(extensions.clone())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SuffixNotFound);
        assert_eq!(
            parse("http://www.example.co.uk", Some(extensions)).unwrap(),
            "example.co.uk"
        );
    }
}
