//! Mission List Config - ordered ship parameters plus output and asset settings
//!
//! Every section implements `Default`, so a config file only needs to list
//! what it changes. The ship list has no per-field defaults: when a file
//! omits `[[ships]]` entirely the bundled list is used instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;
use crate::types::ShipParameters;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one page build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionListConfig {
    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Icon asset settings
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Ships in progression order
    #[serde(default)]
    pub ships: Vec<ShipParameters>,
}

/// Where a loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` on the command line
    Explicit(PathBuf),
    /// `$MISSION_LIST_CONFIG`
    Env(PathBuf),
    /// `./mission_list.toml`
    Local(PathBuf),
    /// Compiled-in `config/mission_list.toml`
    Bundled,
}

impl ConfigSource {
    /// Pick the config source using the standard search order.
    ///
    /// `env_path` is the value of `$MISSION_LIST_CONFIG`, passed in so the
    /// order can be exercised without touching the process environment.
    pub fn resolve(explicit: Option<&Path>, env_path: Option<&str>) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }
        if let Some(path) = env_path.filter(|p| !p.is_empty()) {
            return Self::Env(PathBuf::from(path));
        }
        let local = PathBuf::from(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::Local(local);
        }
        Self::Bundled
    }

    /// File path backing this source, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Env(p) | Self::Local(p) => Some(p),
            Self::Bundled => None,
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit(p) => write!(f, "--config {}", p.display()),
            Self::Env(p) => write!(f, "{} ({})", defaults::CONFIG_ENV_VAR, p.display()),
            Self::Local(p) => write!(f, "./{}", p.display()),
            Self::Bundled => write!(f, "bundled defaults"),
        }
    }
}

impl MissionListConfig {
    /// Load configuration using the standard search order.
    ///
    /// Any failure reading, parsing or validating a chosen file is returned
    /// to the caller; there is no fallback past a file that exists.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let env_path = std::env::var(defaults::CONFIG_ENV_VAR).ok();
        let source = ConfigSource::resolve(explicit, env_path.as_deref());
        let config = match source.path() {
            Some(path) => Self::load_from_file(path)?,
            None => Self::bundled()?,
        };
        info!(%source, ships = config.ships.len(), "Loaded mission list config");
        Ok((config, source))
    }

    /// Load from a specific TOML file path.
    ///
    /// A file without any `[[ships]]` entries inherits the bundled ship list,
    /// so it can override just `[output]` or `[assets]`.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config = Self::parse(&contents, path)?;
        if config.ships.is_empty() {
            info!(path = %path.display(), "Config lists no ships, using bundled ship list");
            config.ships = Self::bundled()?.ships;
        }
        config.validate()?;
        Ok(config)
    }

    /// The compiled-in configuration.
    pub fn bundled() -> Result<Self, ConfigError> {
        let config = Self::parse(defaults::BUNDLED_CONFIG, Path::new("<bundled>"))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML string, warning about unknown keys first.
    fn parse(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!(path = %origin.display(), "{}", w);
        }
        toml::from_str(contents).map_err(|e| ConfigError::Parse(origin.to_path_buf(), e))
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate the config for internal consistency.
    ///
    /// Rules:
    /// - Mission seconds must be finite and positive
    /// - A ship lists each duration type at most once
    /// - Output path must be non-empty
    /// - Asset base URL must be http(s)
    ///
    /// Suspicious-but-legal configs (e.g. a ship listed twice) only warn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (mut errors, warnings) = super::validation::validate_ship_list(self);
        for w in &warnings {
            warn!("{}", w);
        }

        if self.output.path.as_os_str().is_empty() {
            errors.push("output.path must not be empty".to_string());
        }
        let base = &self.assets.base_url;
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            errors.push(format!(
                "assets.base_url must be an http(s) URL, got '{base}'"
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ============================================================================
// Output
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Rendered page location, relative to the working directory
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_PATH)
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: default_output_path() }
    }
}

// ============================================================================
// Assets
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Icon CDN root, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Ship icon size in px; 0 or less requests the original
    #[serde(default = "default_ship_icon_size")]
    pub ship_icon_size: i32,

    /// Egg icon size in px; 0 or less requests the original
    #[serde(default = "default_egg_icon_size")]
    pub egg_icon_size: i32,
}

fn default_base_url() -> String {
    defaults::ASSET_BASE_URL.to_string()
}

const fn default_ship_icon_size() -> i32 {
    defaults::SHIP_ICON_SIZE
}

const fn default_egg_icon_size() -> i32 {
    defaults::EGG_ICON_SIZE
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            ship_icon_size: default_ship_icon_size(),
            egg_icon_size: default_egg_icon_size(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
