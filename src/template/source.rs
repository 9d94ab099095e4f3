// ABOUTME: Explicit template and data source types for the compiler
// ABOUTME: Separates inline content from store paths, with an opt-in legacy string heuristic

use serde_json::Value as JsonValue;
use std::path::PathBuf;

use super::scanner::Delimiters;

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    Inline(String),
    Path(PathBuf),
}

impl TemplateSource {
    pub fn inline(content: impl Into<String>) -> Self {
        Self::Inline(content.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Classify an untyped string the way older callers expect: a string
    /// with no newline and no open delimiter is a path, anything else is
    /// template content.
    ///
    /// A one-line template without any tokens is indistinguishable from a
    /// path and is classified as one. Prefer the explicit constructors.
    pub fn detect(value: &str, delimiters: &Delimiters) -> Self {
        if looks_like_path(value, delimiters) {
            Self::Path(PathBuf::from(value))
        } else {
            Self::Inline(value.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Inline(content) => content.is_empty(),
            Self::Path(path) => path.as_os_str().is_empty(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Inline(_) => "inline",
            Self::Path(_) => "path",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Inline(JsonValue),
    /// Path to a `.json` document; a missing document counts as `{}`
    Path(PathBuf),
}

impl DataSource {
    pub fn inline(value: JsonValue) -> Self {
        Self::Inline(value)
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// A string holding a JSON object is inline data. Anything else goes
    /// through the same heuristic as [`TemplateSource::detect`], and strings
    /// that are not paths fall back to an empty object.
    pub fn detect(value: &str, delimiters: &Delimiters) -> Self {
        match serde_json::from_str::<JsonValue>(value) {
            Ok(data) if data.is_object() => Self::Inline(data),
            _ if looks_like_path(value, delimiters) => Self::Path(PathBuf::from(value)),
            _ => Self::Inline(JsonValue::Object(serde_json::Map::new())),
        }
    }
}

impl From<JsonValue> for DataSource {
    fn from(value: JsonValue) -> Self {
        Self::Inline(value)
    }
}

fn looks_like_path(value: &str, delimiters: &Delimiters) -> bool {
    !value.is_empty() && !value.contains('\n') && !value.contains(delimiters.open.as_str())
}
