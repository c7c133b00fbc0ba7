//! # Configuration
//!
//! Shelf configuration is managed by [`confique`], which layers environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command line**: `--data-dir` (applied by the CLI on top of the loaded config).
//! 2. **Environment variables**: `SHELF_DATA_DIR`, `SHELF_STORAGE_KEY`, `SHELF_LOG_LEVEL`.
//! 3. **Config file**: `shelf.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory | Where the book slot file lives |
//! | `storage_key` | `books` | Name of the slot (file `<key>.json`) |
//! | `log_level` | `warn` | Log filter when `SHELF_LOG` is unset |

use crate::error::{Result, ShelfError};
use crate::store::slot::check_key;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "shelf.toml";

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Directory holding the book slot. Defaults to the OS data directory.
    #[config(env = "SHELF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Name of the slot the collection is stored under.
    #[config(env = "SHELF_STORAGE_KEY", default = "books")]
    pub storage_key: String,

    /// Log filter used when SHELF_LOG is not set (e.g. "warn", "shelf=debug").
    #[config(env = "SHELF_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: "books".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "shelf", "shelf")
}

/// `shelf.toml` inside the OS config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

impl ShelfConfig {
    /// Loads environment variables layered over `file` (if given and present)
    /// layered over the defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        let config: Self = builder
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a `storage_key` that would not name a file in the data dir.
    pub fn validate(&self) -> Result<()> {
        check_key(&self.storage_key).map_err(|e| match e {
            ShelfError::Store(reason) => ShelfError::Config(reason),
            other => other,
        })
    }

    /// The configured data directory, falling back to the OS data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| ShelfError::Config("could not determine a data directory".to_string()))
    }

    /// A commented sample `shelf.toml` listing every key and its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
