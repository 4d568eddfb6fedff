use thiserror::Error;

/// Classifies extraction errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input is not text and not a parsed URL, or carries no host
    InvalidArgument,
    /// Input text fails the URL grammar
    InvalidSyntax,
    /// Host does not end in any configured extension
    SuffixNotFound,
    /// Extension list file could not be read
    Io,
}

/// Domainator error types
#[derive(Error, Debug)]
pub enum DomainatorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Invalid URI: {0}")]
    InvalidUri(#[from] url::ParseError),

    #[error("No known extension found for host: {host}")]
    NotFound { host: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainatorError {
    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainatorError::InvalidArgument(_) | DomainatorError::ParseErrorAtLine { .. } => {
                ErrorKind::InvalidArgument
            }
            DomainatorError::InvalidUri(_) => ErrorKind::InvalidSyntax,
            DomainatorError::NotFound { .. } => ErrorKind::SuffixNotFound,
            DomainatorError::IoError(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainatorError>;
