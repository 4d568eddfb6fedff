use serde_json::Value;
use url::Url;

use crate::error::{DomainatorError, Result};

/// Input accepted by the extractor: raw text or an already-parsed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlInput {
    /// Unparsed URL text
    Text(String),
    /// URL parsed by the caller
    Url(Url),
}

impl UrlInput {
    /// Resolve the input into a structured URL.
    ///
    /// Text is parsed with [`Url::parse`]; syntax failures surface as
    /// [`DomainatorError::InvalidUri`]. Parsed URLs pass through unchanged.
    pub fn into_url(self) -> Result<Url> {
        match self {
            UrlInput::Text(text) => Ok(Url::parse(&text)?),
            UrlInput::Url(url) => Ok(url),
        }
    }
}

impl From<&str> for UrlInput {
    fn from(text: &str) -> Self {
        UrlInput::Text(text.to_string())
    }
}

impl From<String> for UrlInput {
    fn from(text: String) -> Self {
        UrlInput::Text(text)
    }
}

impl From<&String> for UrlInput {
    fn from(text: &String) -> Self {
        UrlInput::Text(text.clone())
    }
}

impl From<Url> for UrlInput {
    fn from(url: Url) -> Self {
        UrlInput::Url(url)
    }
}

impl From<&Url> for UrlInput {
    fn from(url: &Url) -> Self {
        UrlInput::Url(url.clone())
    }
}

/// JSON strings become text input; any other JSON value is rejected.
impl TryFrom<&Value> for UrlInput {
    type Error = DomainatorError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(UrlInput::Text(text.clone())),
            other => Err(DomainatorError::InvalidArgument(format!(
                "expected a string or URL, got {}",
                json_type_name(other)
            ))),
        }
    }
}

impl TryFrom<Value> for UrlInput {
    type Error = DomainatorError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(UrlInput::Text(text)),
            other => UrlInput::try_from(&other),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
