//! Chain settings and `pipekit.toml` loading.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The settings file name to search for.
pub const SETTINGS_FILE_NAME: &str = "pipekit.toml";

/// Settings shared by [`Chain`](crate::Chain) and [`TryChain`](crate::TryChain).
///
/// ```toml
/// [chain]
/// trace_stages = false
/// max_stages = 16
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChainSettings {
    /// Emit a `debug` event for every stage that runs.
    pub trace_stages: bool,

    /// Upper bound on the number of stages a chain accepts.
    pub max_stages: Option<usize>,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            trace_stages: true,
            max_stages: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    chain: ChainSettings,
}

impl ChainSettings {
    /// Parse settings from the contents of a `pipekit.toml` file.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let file: SettingsFile = toml::from_str(contents).context("parse pipekit settings")?;
        Ok(file.chain)
    }
}

/// Look for `pipekit.toml` directly inside `dir`.
pub fn discover_settings(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let path = dir.join(SETTINGS_FILE_NAME);
    if path.exists() {
        debug!("found settings file at {}", path);
        Some(path)
    } else {
        debug!("no settings file found at {}", path);
        None
    }
}

/// Load and parse a settings file.
pub fn load_settings(path: &Utf8Path) -> anyhow::Result<ChainSettings> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read settings file {}", path))?;
    ChainSettings::from_toml_str(&contents).with_context(|| format!("load {}", path))
}
