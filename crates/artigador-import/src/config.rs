//! Import configuration loaded from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming a config file when none is given explicitly.
pub const CONFIG_ENV_VAR: &str = "ARTIGADOR_IMPORT_CONFIG";

/// Options controlling import preparation. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Reject entries whose `author` field yields no authors.
    pub require_authors: bool,
    /// Extension of the PDF expected for each citation key in an upload archive.
    pub pdf_extension: String,
    pub warn_on_duplicate_keys: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            require_authors: true,
            pdf_extension: "pdf".to_string(),
            warn_on_duplicate_keys: true,
        }
    }
}

impl ImportConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path`, else from the file named by [`CONFIG_ENV_VAR`],
    /// else fall back to defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(env_path) => Self::load(env_path),
            None => Ok(Self::default()),
        }
    }

    /// File name the PDF for `cite_key` is expected under.
    pub fn pdf_file_name(&self, cite_key: &str) -> String {
        format!("{}.{}", cite_key, self.pdf_extension.trim_start_matches('.'))
    }
}
