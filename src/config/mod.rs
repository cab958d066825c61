//! Configuration
//!
//! Settings read from `symtab.toml`: the name of the root scope and the
//! layout of the symbol table listing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sema::table::GLOBAL_SCOPE;

/// File looked up by [`SymtabConfig::load_or_default`]
pub const CONFIG_FILE: &str = "symtab.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Layout of the symbol table listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Print the column header and rule under each scope line
    pub header: bool,
    /// Minimum width of the identifier column
    pub name_width: usize,
    /// Minimum width of the type column
    pub type_width: usize,
}

impl ListingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name_width == 0 || self.type_width == 0 {
            return Err(ConfigError::Invalid(
                "listing column widths must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            header: true,
            name_width: 14,
            type_width: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SymtabConfig {
    /// Name of the scope every implicitly created scope hangs off
    pub global_scope: String,
    pub listing: ListingConfig,
}

impl SymtabConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load `symtab.toml` from the working directory, falling back to defaults
    pub fn load_or_default() -> Self {
        Self::load_or_default_in(Path::new("."))
    }

    /// Load `symtab.toml` from `dir`, falling back to defaults
    pub fn load_or_default_in(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using default configuration", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.global_scope.is_empty() || self.global_scope.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "global_scope must be a non-empty name without whitespace, got {:?}",
                self.global_scope
            )));
        }
        self.listing.validate()
    }
}

impl Default for SymtabConfig {
    fn default() -> Self {
        Self {
            global_scope: GLOBAL_SCOPE.to_string(),
            listing: ListingConfig::default(),
        }
    }
}
