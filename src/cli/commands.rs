// ABOUTME: Command implementations for the stencil CLI
// ABOUTME: Handles execution of the compile, split, and list commands

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::args::{Args, CompileArgs};
use super::config::Config;
use crate::store::{FileStore, LocalFileStore};
use crate::template::{merge, CompileOptions, DataSource, TemplateCompiler, TemplateSource};

/// Compile a template and print or write the result
pub async fn compile_template(args: CompileArgs, config: &Config) -> Result<()> {
    let compiler = TemplateCompiler::local();
    let store = compiler.store();

    let mut config = config.clone();
    config.merge_variables(Args::parse_variables(&args.vars)?);
    if let Some(open) = args.open {
        config.delimiters.open = open;
    }
    if let Some(close) = args.close {
        config.delimiters.close = close;
    }
    let delimiters = config.delimiters.to_delimiters();

    let template = if args.inline {
        TemplateSource::inline(args.template)
    } else if args.file {
        TemplateSource::path(args.template)
    } else {
        TemplateSource::detect(&args.template, &delimiters)
    };

    let data = args
        .data
        .as_deref()
        .map(|value| DataSource::detect(value, &delimiters));

    let default_data = match args.defaults.or_else(|| config.default_data.clone()) {
        Some(path) => Some(read_layer(store, &path).await?),
        None => None,
    };

    let master_file = match args.master.or_else(|| config.master_data.clone()) {
        Some(path) => read_layer(store, &path).await?,
        None => JsonValue::Object(serde_json::Map::new()),
    };
    let master_data = merge(&[&master_file, &Args::variables_to_json(&config.variables)]);

    let mut options = CompileOptions::new(template)
        .with_master_data(master_data)
        .with_delimiters(delimiters);
    options.data = data;
    options.default_data = default_data;

    let output = compiler
        .compile(options)
        .await
        .context("Failed to compile template")?;

    match args.output {
        Some(path) => {
            store
                .write(&path, &output)
                .await
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            info!("Compiled template written to {}", path.display());
        }
        None => {
            print!("{}", output);
            std::io::stdout().flush()?;
        }
    }

    Ok(())
}

/// Split a document and print its layout, body, or both as JSON
pub async fn split_document(document: PathBuf, layout_only: bool, body_only: bool) -> Result<()> {
    let compiler = TemplateCompiler::local();
    let split = compiler
        .split(&document)
        .await
        .with_context(|| format!("Failed to split document '{}'", document.display()))?;

    if layout_only {
        let layout = split.layout.unwrap_or(JsonValue::Null);
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else if body_only {
        print!("{}", split.body);
        std::io::stdout().flush()?;
    } else {
        println!("{}", serde_json::to_string_pretty(&split)?);
    }

    Ok(())
}

/// List matching files, one per line
pub async fn list_files(folder: PathBuf, patterns: Vec<String>, ignore: Vec<String>) -> Result<()> {
    let store = LocalFileStore::new();
    let mut files = store
        .list_files(&folder, &patterns, &ignore)
        .await
        .with_context(|| format!("Failed to list files in '{}'", folder.display()))?;
    files.sort();

    info!("Found {} files in {}", files.len(), folder.display());
    for file in files {
        println!("{}", file.display());
    }

    Ok(())
}

/// Read a defaults or master layer, which must exist
async fn read_layer(store: &LocalFileStore, path: &Path) -> Result<JsonValue> {
    store
        .read_json(path)
        .await
        .with_context(|| format!("Failed to read data layer '{}'", path.display()))
}
