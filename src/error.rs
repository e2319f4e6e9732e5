use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that abort a batch. Failures of a single conversion are not
/// represented here, see [crate::convert::ConvertError].
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file {path:?}: {source}")]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("failed to parse config file {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to open input table {path:?}: {source}")]
    Open { path: PathBuf, source: csv::Error },

    #[error("failed to read input table: {0}")]
    Csv(#[from] csv::Error),

    #[error("input table is empty, expected a header row")]
    NoHeader,

    #[error("row {row} has {len} fields, expected a value in column {column}")]
    MissingColumn {
        row: usize,
        column: usize,
        len: usize,
    },

    #[error("header column {column} is empty, cannot name the output directory")]
    EmptyName { column: usize },

    #[error("failed to create output directory {path:?}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}
