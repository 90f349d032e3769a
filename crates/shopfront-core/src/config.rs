use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::route::{AliasRule, AliasTable};

/// Build flavour that gates development-only diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    pub fn is_development(self) -> bool {
        self == RuntimeMode::Development
    }
}

impl Default for RuntimeMode {
    /// Debug builds run in development mode, release builds in production.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            RuntimeMode::Development
        } else {
            RuntimeMode::Production
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeMode::Development => f.write_str("development"),
            RuntimeMode::Production => f.write_str("production"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown runtime mode {0:?} (expected \"development\" or \"production\")")]
pub struct RuntimeModeParseError(String);

impl FromStr for RuntimeMode {
    type Err = RuntimeModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(RuntimeMode::Development),
            "production" | "prod" => Ok(RuntimeMode::Production),
            _ => Err(RuntimeModeParseError(s.to_string())),
        }
    }
}

/// Global configuration loaded from `~/.config/shopfront/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopfrontConfig {
    /// Runtime mode; if missing, the build default is used.
    #[serde(default)]
    pub mode: Option<RuntimeMode>,
    /// Catalog JSON used by `shopfront cart` when `--catalog` is not given.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Extra legacy aliases, tried after the built-in ones.
    #[serde(default)]
    pub aliases: Vec<AliasRule>,
}

impl ShopfrontConfig {
    pub fn runtime_mode(&self) -> RuntimeMode {
        self.mode.unwrap_or_default()
    }

    pub fn alias_table(&self) -> AliasTable {
        AliasTable::with_extra(self.aliases.iter().cloned())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shopfront")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShopfrontConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ShopfrontConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<ShopfrontConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ShopfrontConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
