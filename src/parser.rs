use std::fs;
use std::path::Path;

use crate::error::{DomainatorError, Result};
use crate::extensions::{normalize_extension, ExtensionSet};

/// Parse an extension list from text.
///
/// One extension per line. `#` starts a comment; blank lines are skipped.
pub fn parse_extensions(text: &str) -> Result<ExtensionSet> {
    let mut extensions = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        // Remove comments and trim whitespace
        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let extension = normalize_extension(line).map_err(|e| DomainatorError::ParseErrorAtLine {
            line: line_num,
            message: e.to_string(),
        })?;
        extensions.push(extension);
    }

    ExtensionSet::new(extensions)
}

/// Parse an extension list from a file.
pub fn parse_extensions_from_file(path: impl AsRef<Path>) -> Result<ExtensionSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let set = parse_extensions(&text)?;
    tracing::debug!(
        path = %path.display(),
        count = set.len(),
        "loaded extension list"
    );
    Ok(set)
}
