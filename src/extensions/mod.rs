//! Public suffix extension sets.
//!
//! An [`ExtensionSet`] holds dot-prefixed suffixes such as `.com` or `.co.uk`.
//! Entries are validated and lowercased on construction and never change
//! afterwards, so a set can be shared freely between extractors and threads.
//!
//! ## Example
//!
//! ```
//! use domainator::ExtensionSet;
//!
//! let set = ExtensionSet::new([".uk", ".co.uk"]).unwrap();
//!
//! assert_eq!(set.longest_match("www.example.co.uk"), Some(".co.uk"));
//! assert_eq!(set.longest_match("www.example.com"), None);
//! ```

mod defaults;

pub use defaults::{default_extensions, DEFAULT_EXTENSIONS};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DomainatorError, Result};

/// Immutable set of dot-prefixed domain suffixes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ExtensionSet {
    suffixes: HashSet<String>,
}

impl ExtensionSet {
    /// Build a set from extension strings.
    ///
    /// Every entry must start with `.` and contain no empty label. Entries are
    /// lowercased and duplicates collapse.
    pub fn new<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions.into_iter();
        let mut suffixes = HashSet::with_capacity(extensions.size_hint().0);
        for extension in extensions {
            suffixes.insert(normalize_extension(extension.as_ref())?);
        }
        Ok(Self { suffixes })
    }

    /// Check if the exact extension is a member
    pub fn contains(&self, extension: &str) -> bool {
        self.suffixes.contains(&extension.to_lowercase())
    }

    /// Number of extensions in the set
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Iterate over the extensions in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    /// Find the longest member that `host` ends with, leaving at least one
    /// non-empty label in front of it.
    ///
    /// Assumes `host` is already lowercased. Walks the host from its leftmost
    /// dot to the right, so the first hit is the longest suffix.
    pub fn longest_match(&self, host: &str) -> Option<&str> {
        let mut pos = 0;
        while let Some(dot_pos) = host[pos..].find('.') {
            let start = pos + dot_pos;
            // The label in front of the candidate suffix must be non-empty
            if start > pos {
                if let Some(extension) = self.suffixes.get(&host[start..]) {
                    return Some(extension.as_str());
                }
            }
            pos = start + 1;
        }
        None
    }
}

impl TryFrom<Vec<String>> for ExtensionSet {
    type Error = DomainatorError;

    fn try_from(extensions: Vec<String>) -> Result<Self> {
        Self::new(extensions)
    }
}

impl From<ExtensionSet> for Vec<String> {
    fn from(set: ExtensionSet) -> Self {
        let mut extensions: Vec<String> = set.suffixes.into_iter().collect();
        extensions.sort();
        extensions
    }
}

/// Validate and lowercase a single extension
pub(crate) fn normalize_extension(raw: &str) -> Result<String> {
    let extension = raw.trim().to_lowercase();

    let labels = extension.strip_prefix('.').ok_or_else(|| {
        DomainatorError::InvalidArgument(format!(
            "extension must start with '.': {:?}",
            raw
        ))
    })?;

    if labels.split('.').any(|label| label.is_empty()) {
        return Err(DomainatorError::InvalidArgument(format!(
            "extension contains an empty label: {:?}",
            raw
        )));
    }

    if labels.chars().any(char::is_whitespace) {
        return Err(DomainatorError::InvalidArgument(format!(
            "extension contains whitespace: {:?}",
            raw
        )));
    }

    Ok(extension)
}
