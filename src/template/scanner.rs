// ABOUTME: Token scanner that extracts delimiter-bounded placeholders from text
// ABOUTME: Builds an escaped regex from the delimiter pair and returns tokens in source order

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{Result, TemplateError};

pub const DEFAULT_OPEN: &str = "{{";
pub const DEFAULT_CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    /// Build a delimiter pair. If either side is empty, both fall back to the
    /// `{{` / `}}` defaults.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        let open = open.into();
        let close = close.into();
        if open.is_empty() || close.is_empty() {
            return Self::default();
        }
        Self { open, close }
    }

    fn pattern(&self) -> Result<Regex> {
        let pattern = format!(
            "{}(.*?){}",
            regex::escape(&self.open),
            regex::escape(&self.close)
        );
        Regex::new(&pattern).map_err(|e| TemplateError::SyntaxError(e.to_string()))
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN.to_string(),
            close: DEFAULT_CLOSE.to_string(),
        }
    }
}

/// A placeholder found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Dotted data path, e.g. `project.name`
    pub token: String,
    /// Text as it appears in the template, e.g. `{{ project.name }}`
    pub reference: String,
}

/// Extract every delimited token from `template`, left to right.
///
/// Duplicates are kept as separate entries. The token path is the matched
/// text with all whitespace and curly braces removed, which is why custom
/// delimiters are expected to be built from brace characters.
pub fn scan(template: &str, delimiters: &Delimiters) -> Result<Vec<Token>> {
    let pattern = delimiters.pattern()?;

    Ok(pattern
        .find_iter(template)
        .map(|m| m.as_str())
        .filter(|reference| !reference.is_empty())
        .map(|reference| Token {
            token: reference
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '{' && *c != '}')
                .collect(),
            reference: reference.to_string(),
        })
        .collect())
}
