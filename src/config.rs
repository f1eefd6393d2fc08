//! User configuration for the `keycalc` front end.
//!
//! Read from `<config dir>/keycalc/config.toml` unless a path is given.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::calculator::is_accepted;
use crate::keymap::Keymap;

const CONFIG_DIR: &str = "keycalc";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid key alias {from:?} = {to:?}: {reason}")]
    InvalidAlias {
        from: String,
        to: String,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    pub display: DisplayConfig,
    /// Extra key aliases, one character to one calculator key.
    pub keys: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Column the displays are right-aligned to.
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { width: 28 }
    }
}

impl Config {
    /// Parse a configuration from TOML text. `path` is only used in errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the keymap: the default aliases plus those in `[keys]`.
    pub fn keymap(&self) -> Result<Keymap, ConfigError> {
        let mut keymap = Keymap::default();
        for (from, to) in &self.keys {
            let invalid = |reason| ConfigError::InvalidAlias {
                from: from.clone(),
                to: to.clone(),
                reason,
            };
            let from_char =
                single_char(from).ok_or_else(|| invalid("alias must be one character"))?;
            let to_char =
                single_char(to).ok_or_else(|| invalid("target must be one character"))?;
            if !is_accepted(to_char) {
                return Err(invalid("target is not a calculator key"));
            }
            keymap.insert(from_char, to_char);
        }
        Ok(keymap)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration.
///
/// An explicit `path` must exist. Without one, the default location is
/// tried and a missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_from(path, true),
        None => match default_config_path() {
            Some(path) => load_from(&path, false),
            None => Ok(Config::default()),
        },
    }
}

/// Read and parse `path`. A missing file is an error only when `required`.
fn load_from(path: &Path, required: bool) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), "loaded config");
            Config::parse(&text, path)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
