//! Engine configuration and loader.
//!
//! Settings live in `zuul.toml` next to the engine's other data files. Every key is
//! optional and a missing or broken file falls back to the defaults, so the game
//! always starts. The world map itself is not configurable.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Default limit on how deeply `test` scripts may nest.
pub const DEFAULT_MAX_SCRIPT_DEPTH: usize = 16;

/// Runtime settings for the interpreter and its terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Directory that `test <name>` resolves script names against.
    pub script_root: PathBuf,
    /// Maximum number of nested `test` scripts. Zero disables scripts entirely.
    pub max_script_depth: usize,
    /// Echo every raw input line back before interpreting it.
    pub echo_input: bool,
    /// Print image references when the terminal view is flushed.
    pub show_images: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            script_root: PathBuf::from("."),
            max_script_depth: DEFAULT_MAX_SCRIPT_DEPTH,
            echo_input: true,
            show_images: true,
        }
    }
}

impl EngineConfig {
    /// Resolve a script name against the configured script root.
    ///
    /// Returns `None` unless every component of `name` is a plain file or directory
    /// name, so absolute paths and `..` can never leave the root.
    pub fn script_path(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let plain = relative.components().count() > 0
            && relative.components().all(|part| matches!(part, Component::Normal(_)));
        plain.then(|| self.script_root.join(relative))
    }
}

/// Loads engine configuration from a TOML file, falling back to defaults on error.
///
/// This function never fails; problems are logged with `warn!`.
pub fn load_config(toml_path: &Path) -> EngineConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!("engine configuration loaded from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load engine configuration from '{}': {:#}. Using defaults.",
                toml_path.display(),
                e
            );
            EngineConfig::default()
        },
    }
}

/// Attempts to load engine configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn try_load_config(toml_path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading engine configuration from '{}'", toml_path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing engine configuration from '{}'", toml_path.display()))
}
