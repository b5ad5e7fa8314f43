//! Shell configuration
//!
//! Read from an optional TOML file; command-line flags override it.
//!
//! ```toml
//! home = "/home/user"
//! prompt = "vfs"
//! history_file = "/tmp/vfs_history.log"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{name}': {error}")]
    Io {
        name: String,
        #[source]
        error: io::Error,
    },

    #[error("invalid config '{name}': {error}")]
    Parse {
        name: String,
        #[source]
        error: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Virtual path substituted for `$HOME` and `~`.
    pub home: String,
    /// Label shown before the current path in the prompt.
    pub prompt: String,
    /// Plain log every entered line is appended to.
    pub history_file: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            prompt: "vfs".to_string(),
            history_file: None,
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(name: &str, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|error| ConfigError::Parse { name: name.to_string(), error })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let name = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|error| ConfigError::Io { name: name.clone(), error })?;
        Self::from_toml_str(&name, &text)
    }
}
