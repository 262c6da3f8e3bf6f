//! Error types for import preparation and configuration

use std::path::PathBuf;

use thiserror::Error;

/// File-level import errors. Per-entry problems are reported as
/// [`crate::ImportFailure`]s instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Empty input")]
    EmptyInput,
    #[error("No BibTeX entries found in input")]
    NoEntries,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
