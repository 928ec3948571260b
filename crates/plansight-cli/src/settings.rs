//! Settings file handling
//!
//! Settings live in `<config dir>/plansight/settings.toml`:
//!
//! ```toml
//! [analyzer]
//! max_depth = 64
//!
//! [display]
//! max_nodes = 800
//! default_engine = "postgres"
//! ```
//!
//! Every key is optional. A missing default file means default settings.

use anyhow::{Context, Result};
use plansight_analyzer::{DEFAULT_MAX_FLAT_NODES, ParseOptions, PlanEngine};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("plansight"))
}

pub fn settings_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join(SETTINGS_FILE_NAME))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub analyzer: ParseOptions,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Rows shown before the tree view is cut off
    pub max_nodes: usize,
    /// Engine used when `--engine` is not given
    pub default_engine: PlanEngine,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_FLAT_NODES,
            default_engine: PlanEngine::Postgres,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default location
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match settings_file() {
                Ok(path) if path.exists() => path,
                Ok(path) => {
                    tracing::debug!("No settings file at {:?}, using defaults", path);
                    return Ok(Self::default());
                }
                Err(err) => {
                    tracing::warn!("{err}; using default settings");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let settings = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;

        tracing::debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("").expect("parse failed");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.analyzer.max_depth, plansight_analyzer::DEFAULT_MAX_DEPTH);
        assert_eq!(settings.display.max_nodes, 800);
        assert_eq!(settings.display.default_engine, PlanEngine::Postgres);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml_str(indoc! {r#"
            [display]
            default_engine = "mssql"
        "#})
        .expect("parse failed");

        assert_eq!(settings.display.default_engine, PlanEngine::SqlServer);
        assert_eq!(settings.display.max_nodes, DEFAULT_MAX_FLAT_NODES);
        assert_eq!(settings.analyzer, ParseOptions::default());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(
            &path,
            indoc! {r#"
                [analyzer]
                max_depth = 12

                [display]
                max_nodes = 50
            "#},
        )
        .expect("write settings");

        let settings = Settings::load(Some(&path)).expect("load failed");
        assert_eq!(settings.analyzer.max_depth, 12);
        assert_eq!(settings.display.max_nodes, 50);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Settings::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read settings"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Settings::from_toml_str("[analyzer]\nmax_depth = \"deep\"").is_err());
    }
}
