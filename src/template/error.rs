// ABOUTME: Error types for template compilation and layout splitting
// ABOUTME: Distinguishes caller validation errors, malformed documents, and store failures

use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid format in {path}: {message}")]
    FormatError { path: String, message: String },

    #[error("Template syntax error: {0}")]
    SyntaxError(String),

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
