//! Plant file errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a plant file
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read plant file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected {expected} comma-separated fields, found {found}")]
    FieldCount { line: usize, expected: usize, found: usize },

    #[error("Line {line}: invalid {field} '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
