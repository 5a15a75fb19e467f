// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures of the CSV → JSON conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source file does not exist.
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Source exists but could not be read (permissions, directory, ...).
    #[error("failed to read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Row shape, encoding or header problems.
    #[error("malformed input at line {line}: {reason}")]
    Malformed { line: u64, reason: MalformedReason },

    /// Destination could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field {field} is not valid UTF-8")]
    Encoding { field: usize },

    #[error("duplicate header '{name}'")]
    DuplicateHeader { name: String },

    #[error("{0}")]
    Syntax(String),
}

impl ConvertError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, ConvertError::Malformed { .. })
    }
}

/// Failures of the plot-data extractor.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("no Plotly chart script found")]
    NoPlotScript,

    #[error("could not locate Plotly data array")]
    NoDataArray,

    #[error("failed to parse Plotly data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
pub type PlotResult<T> = Result<T, PlotError>;
