//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treelab/treelab.toml`
//! 3. Environment variables: `TREELAB_*` prefix

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tree::Balancing;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid tree mode: {0:?} (expected \"bst\" or \"avl\")")]
    InvalidMode(String),
}

/// User-tunable settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default tree variant when --mode is not given ("bst" or "avl")
    pub mode: String,
    /// Width of the menu rules
    pub menu_width: usize,
    /// Symbol shown for absent slots in the 2D diagram
    pub gap_marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: "bst".into(),
            menu_width: 32,
            gap_marker: "*".into(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);
        if let Some(path) = Self::global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        let settings: Settings = builder
            .add_source(Environment::with_prefix("TREELAB"))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        match self.mode.as_str() {
            "bst" | "avl" => Ok(()),
            other => Err(SettingsError::InvalidMode(other.to_string())),
        }
    }

    /// `$XDG_CONFIG_HOME/treelab/treelab.toml` (platform equivalent).
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "treelab").map(|dirs| dirs.config_dir().join("treelab.toml"))
    }

    /// Balancing policy for the configured default mode.
    pub fn balancing(&self) -> Balancing {
        if self.mode == "avl" {
            Balancing::Avl
        } else {
            Balancing::Plain
        }
    }
}
