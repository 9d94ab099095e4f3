// ABOUTME: Template compiler orchestrating source loading, data merging, and substitution
// ABOUTME: Resolves every token against the merged data layers through a pluggable file store

use serde_json::Value as JsonValue;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::error::{Result, TemplateError};
use super::layout::{self, LayoutDocument};
use super::merge::merge;
use super::path::{is_falsy, render_value, resolve};
use super::scanner::{scan, Delimiters};
use super::source::{DataSource, TemplateSource};
use crate::store::{FileStore, LocalFileStore};

/// Everything a single compile call needs
#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub template: TemplateSource,
    pub data: Option<DataSource>,
    /// Fills values missing from `data`
    pub default_data: Option<JsonValue>,
    /// Overrides values from both `data` and `default_data`
    pub master_data: Option<JsonValue>,
    pub delimiters: Delimiters,
}

impl CompileOptions {
    pub fn new(template: TemplateSource) -> Self {
        Self {
            template,
            data: None,
            default_data: None,
            master_data: None,
            delimiters: Delimiters::default(),
        }
    }

    pub fn with_data(mut self, data: impl Into<DataSource>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_default_data(mut self, default_data: JsonValue) -> Self {
        self.default_data = Some(default_data);
        self
    }

    pub fn with_master_data(mut self, master_data: JsonValue) -> Self {
        self.master_data = Some(master_data);
        self
    }

    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }
}

#[derive(Debug)]
pub struct TemplateCompiler<S: ?Sized = LocalFileStore> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for TemplateCompiler<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl TemplateCompiler<LocalFileStore> {
    /// Compiler backed by the local filesystem
    pub fn local() -> Self {
        Self::new(LocalFileStore::new())
    }
}

impl Default for TemplateCompiler<LocalFileStore> {
    fn default() -> Self {
        Self::local()
    }
}

impl<S: FileStore> TemplateCompiler<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S: FileStore + ?Sized> TemplateCompiler<S> {
    pub fn with_store(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fill the template with values from the merged data layers.
    ///
    /// Each scanned token replaces the first remaining occurrence of its
    /// reference in the output built so far. Undefined and falsy values
    /// become empty strings.
    pub async fn compile(&self, options: CompileOptions) -> Result<String> {
        if options.template.is_empty() {
            return Ok(String::new());
        }

        debug!("Compiling {} template", options.template.kind());
        let template = self.load_template(&options.template).await?;
        let context = self
            .load_context(
                options.data.as_ref(),
                options.default_data.as_ref(),
                options.master_data.as_ref(),
            )
            .await?;

        render(&template, &context, &options.delimiters)
    }

    /// Split a stored document into its layout header and body
    pub async fn split(&self, path: &Path) -> Result<LayoutDocument> {
        layout::split_document(self.store.as_ref(), path).await
    }

    async fn load_template(&self, source: &TemplateSource) -> Result<String> {
        match source {
            TemplateSource::Inline(content) => Ok(content.clone()),
            TemplateSource::Path(path) => {
                let bytes = self.store.read(path).await?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }

    /// Merge `default_data < data < master_data` into one context
    async fn load_context(
        &self,
        data: Option<&DataSource>,
        default_data: Option<&JsonValue>,
        master_data: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        let empty = JsonValue::Object(serde_json::Map::new());
        let data = match data {
            Some(DataSource::Inline(value)) => value.clone(),
            Some(DataSource::Path(path)) => self.load_data_file(path).await?,
            None => empty.clone(),
        };

        Ok(merge(&[
            default_data.unwrap_or(&empty),
            &data,
            master_data.unwrap_or(&empty),
        ]))
    }

    async fn load_data_file(&self, path: &Path) -> Result<JsonValue> {
        if path.extension().map_or(true, |ext| ext != "json") {
            return Err(TemplateError::ValidationError(format!(
                "data path '{}' must be a json file",
                path.display()
            )));
        }

        if !self.store.exists(path).await {
            info!(
                "Data file {} does not exist, using empty data",
                path.display()
            );
            return Ok(JsonValue::Object(serde_json::Map::new()));
        }

        Ok(self.store.read_json(path).await?)
    }
}

/// Substitute every token in `template` from `context`.
///
/// Replacement works on the output built so far, so a substituted value that
/// contains another token's reference text can be picked up by a later
/// replacement instead of the original occurrence.
pub fn render(template: &str, context: &JsonValue, delimiters: &Delimiters) -> Result<String> {
    let tokens = scan(template, delimiters)?;
    debug!("Found {} tokens", tokens.len());

    Ok(tokens.iter().fold(template.to_string(), |output, token| {
        let value = match resolve(context, &token.token) {
            Some(value) if !is_falsy(value) => render_value(value),
            _ => String::new(),
        };
        output.replacen(&token.reference, &value, 1)
    }))
}
