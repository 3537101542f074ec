use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::{InvalidUrlPolicy, ValueStrategy};

/// Default number of parameters per generated URL.
pub const DEFAULT_CHUNK: usize = 15;

fn default_chunk() -> usize {
    DEFAULT_CHUNK
}

/// Defaults loaded from `~/.config/urlmod/config.toml`. Command-line flags override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlmodConfig {
    /// Maximum number of query parameters in a generated URL.
    #[serde(default = "default_chunk")]
    pub chunk: usize,
    /// "replace" or "suffix"; only used by the combine strategy.
    #[serde(default)]
    pub value_strategy: ValueStrategy,
    /// Percent-encode values once before the URL serializer encodes them again.
    #[serde(default)]
    pub double_encode: bool,
    /// "abort" (default) or "skip" for URLs that cannot be expanded.
    #[serde(default)]
    pub on_invalid_url: InvalidUrlPolicy,
}

impl Default for UrlmodConfig {
    fn default() -> Self {
        Self {
            chunk: DEFAULT_CHUNK,
            value_strategy: ValueStrategy::default(),
            double_encode: false,
            on_invalid_url: InvalidUrlPolicy::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlmod")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG location, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlmodConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UrlmodConfig> {
    if !path.exists() {
        let default_cfg = UrlmodConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Load an existing config file; missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<UrlmodConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: UrlmodConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
