// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and the compile, split, and list subcommands

use clap::{Parser, Subcommand};
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::template::merge;

#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(about = "Fill text templates with values from layered JSON data")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a template against JSON data
    Compile(CompileArgs),

    /// Split a document into its layout header and body
    Split {
        #[arg(help = "Path to the document")]
        document: PathBuf,

        #[arg(long, conflicts_with = "body_only", help = "Print only the layout JSON")]
        layout_only: bool,

        #[arg(long, help = "Print only the body")]
        body_only: bool,
    },

    /// List files in a folder matching glob patterns
    List {
        #[arg(help = "Folder to search")]
        folder: PathBuf,

        #[arg(short, long = "pattern", help = "Glob pattern relative to the folder (default *.*)")]
        patterns: Vec<String>,

        #[arg(long, help = "Glob pattern of files to skip")]
        ignore: Vec<String>,
    },
}

#[derive(clap::Args, Debug)]
pub struct CompileArgs {
    #[arg(help = "Template file path or inline template content")]
    pub template: String,

    #[arg(long, conflicts_with = "file", help = "Treat TEMPLATE as inline content")]
    pub inline: bool,

    #[arg(long, help = "Treat TEMPLATE as a file path")]
    pub file: bool,

    #[arg(short, long, help = "Data as a .json file path or inline JSON")]
    pub data: Option<String>,

    #[arg(long, help = "JSON file providing default values")]
    pub defaults: Option<PathBuf>,

    #[arg(long, help = "JSON file with values that override all other data")]
    pub master: Option<PathBuf>,

    #[arg(
        short = 'V',
        long = "var",
        help = "Override a value in the master layer (key.path=value)"
    )]
    pub vars: Vec<String>,

    #[arg(long, help = "Opening token delimiter")]
    pub open: Option<String>,

    #[arg(long, help = "Closing token delimiter")]
    pub close: Option<String>,

    #[arg(short, long, help = "Write the result to a file instead of stdout")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(vars: &[String]) -> anyhow::Result<HashMap<String, String>> {
        let mut variables = HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }

    /// Expand `key.path` variables into a nested JSON object.
    ///
    /// Keys are applied in sorted order, so `a.b` wins over a plain `a`.
    pub fn variables_to_json(variables: &HashMap<String, String>) -> JsonValue {
        let mut keys: Vec<&String> = variables.keys().collect();
        keys.sort();

        let layers: Vec<JsonValue> = keys
            .into_iter()
            .filter_map(|key| {
                let mut segments = key.split('.').filter(|s| !s.is_empty()).rev();
                let leaf = segments.next()?;

                let mut nested = Map::new();
                nested.insert(leaf.to_string(), JsonValue::String(variables[key].clone()));
                for segment in segments {
                    let mut parent = Map::new();
                    parent.insert(segment.to_string(), JsonValue::Object(nested));
                    nested = parent;
                }
                Some(JsonValue::Object(nested))
            })
            .collect();

        merge(&layers.iter().collect::<Vec<_>>())
    }
}
