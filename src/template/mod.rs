// ABOUTME: Template compiler module for stencil
// ABOUTME: Provides token scanning, dot-path resolution, data merging, and layout splitting

pub mod compiler;
pub mod error;
pub mod layout;
pub mod merge;
pub mod path;
pub mod scanner;
pub mod source;

pub use compiler::{render, CompileOptions, TemplateCompiler};
pub use error::{Result, TemplateError};
pub use layout::{split_document, split_text, LayoutDocument};
pub use merge::merge;
pub use path::resolve;
pub use scanner::{scan, Delimiters, Token};
pub use source::{DataSource, TemplateSource};
