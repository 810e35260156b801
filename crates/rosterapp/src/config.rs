//! # Configuration
//!
//! Roster configuration is loaded with [`confique`], layering sources in priority order:
//!
//! 1. **Environment variables**: `ROSTER_CONFIRM`, `ROSTER_SHOW_TRASH`, `ROSTER_COLOR`.
//! 2. **Explicit file**: the path given with `--config`, if any.
//! 3. **User config**: `roster.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Missing files are skipped. Command-line flags are applied on top by the client.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `confirm` | `true` | Ask before delete, restore, purge, empty-trash and prune |
//! | `show_trash` | `false` | Show the trash section from the start |
//! | `color` | `true` | Allow ANSI styling when stdout is a terminal |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "roster.toml";

/// Configuration for roster, stored in `roster.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Ask for confirmation before destructive operations.
    #[config(default = true, env = "ROSTER_CONFIRM")]
    pub confirm: bool,

    /// Show the trash section at startup.
    #[config(default = false, env = "ROSTER_SHOW_TRASH")]
    pub show_trash: bool,

    /// Allow colored output.
    #[config(default = true, env = "ROSTER_COLOR")]
    pub color: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            confirm: true,
            show_trash: false,
            color: true,
        }
    }
}

impl RosterConfig {
    /// Loads the full layered configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit {
            builder = builder.file(path);
        }
        if let Some(path) = default_config_path() {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Loads a single file over the defaults, ignoring the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self::builder().file(path).load()?)
    }
}

/// `roster.toml` in the platform config directory, when one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "roster").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert!(config.confirm);
        assert!(!config.show_trash);
        assert!(config.color);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig::load_from(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "confirm = false\nshow_trash = true\n").unwrap();

        let config = RosterConfig::load_from(&path).unwrap();
        assert!(!config.confirm);
        assert!(config.show_trash);
        assert!(config.color);
    }

    #[test]
    fn test_invalid_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "confirm = \"maybe\"\n").unwrap();

        let err = RosterConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, crate::error::RosterError::Config(_)));
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(CONFIG_FILENAME));
        }
    }
}
