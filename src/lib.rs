// ABOUTME: Main library module for the stencil template compiler
// ABOUTME: Exports the compiler, file store, and CLI modules and the public API

pub mod cli;
pub mod store;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use store::{FileStore, LocalFileStore, MemoryFileStore, StoreError};
pub use template::{
    CompileOptions, DataSource, Delimiters, LayoutDocument, TemplateCompiler, TemplateError,
    TemplateSource,
};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
