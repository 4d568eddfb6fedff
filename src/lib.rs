//! Domainator - extract the registrable domain from URLs
//!
//! This library turns heterogeneous URL input into a comparable domain
//! identifier, e.g. `example.co.uk` from `https://www.example.co.uk/path`.
//! It provides:
//! - URL parsing from text or already-parsed [`url::Url`] values
//! - Longest-suffix matching against a configurable extension set
//! - A built-in default set of common suffixes
//! - Extension lists loaded from text files or JSON
//!
//! # Example
//!
//! ```rust
//! use domainator::{DomainExtractor, ErrorKind, ExtensionSet};
//!
//! // Default extensions
//! let extractor = DomainExtractor::new();
//! assert_eq!(extractor.parse("http://www.example.com/foo?x=y").unwrap(), "example.com");
//!
//! // Custom extensions: the longest matching suffix wins
//! let extensions = ExtensionSet::new([".uk", ".co.uk"]).unwrap();
//! let extractor = DomainExtractor::with_extensions(extensions);
//! assert_eq!(extractor.parse("http://www.example.co.uk").unwrap(), "example.co.uk");
//!
//! let err = extractor.parse("http://www.example.com").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::SuffixNotFound);
//! ```
//!
//! # Extension Lists
//!
//! Extension files hold one dot-prefixed suffix per line:
//! ```text
//! # United Kingdom
//! .uk
//! .co.uk    # commercial
//! ```
//!
//! ## Errors
//!
//! | Kind | Trigger |
//! |------|---------|
//! | `InvalidArgument` | Input is neither text nor a URL, or the URL has no host |
//! | `InvalidSyntax` | Input text is not a valid URL |
//! | `SuffixNotFound` | Host ends in no configured extension |

pub mod error;
pub mod extensions;
pub mod extractor;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use error::{DomainatorError, ErrorKind, Result};
pub use extensions::{default_extensions, ExtensionSet, DEFAULT_EXTENSIONS};
pub use extractor::{parse, DomainExtractor};
pub use parser::{parse_extensions, parse_extensions_from_file};
pub use types::UrlInput;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let list = r#"
# Custom list
.uk
.co.uk
"#;

        // Load extensions
        let extensions = parse_extensions(list).unwrap();
        assert_eq!(extensions.len(), 2);

        // Extract with the custom list
        let extractor = DomainExtractor::with_extensions(extensions);
        assert_eq!(
            extractor.parse("https://shop.example.co.uk/basket").unwrap(),
            "example.co.uk"
        );

        // Extract with defaults
        assert_eq!(parse("http://www.example.com", None).unwrap(), "example.com");

        // Each failure maps to its own kind
        assert_eq!(
            extractor.parse(":").unwrap_err().kind(),
            ErrorKind::InvalidSyntax
        );
        assert_eq!(
            extractor.parse("http://www.example.com").unwrap_err().kind(),
            ErrorKind::SuffixNotFound
        );
        assert_eq!(
            extractor
                .try_parse_value(&serde_json::json!(42))
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidArgument
        );
    }
}
