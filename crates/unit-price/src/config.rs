//! Runtime configuration
//!
//! Loaded from YAML; every field has a default so an empty file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnitPriceError};
use crate::offline::{CACHE_NAME, OFFLINE_FALLBACK, PRECACHE_ASSETS, SCOPE};

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Cache lifecycle and warnings
    #[default]
    Normal,
    /// Extra output
    Verbose,
    /// Every state transition
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when stderr is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

/// Offline asset cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Versioned cache name
    pub name: String,
    /// URL scope the worker controls
    pub scope: String,
    /// Assets precached on install
    pub assets: Vec<String>,
    /// Document served for offline navigations
    pub fallback: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            name: CACHE_NAME.to_string(),
            scope: SCOPE.to_string(),
            assets: PRECACHE_ASSETS.iter().map(ToString::to_string).collect(),
            fallback: OFFLINE_FALLBACK.to_string(),
        }
    }
}

impl CacheConfig {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(UnitPriceError::config("cache name must not be empty"));
        }
        if !self.scope.starts_with('/') || !self.scope.ends_with('/') {
            return Err(UnitPriceError::config(format!(
                "cache scope must start and end with '/': {}",
                self.scope
            )));
        }
        if let Some(outside) = self
            .assets
            .iter()
            .chain(std::iter::once(&self.fallback))
            .find(|url| !url.starts_with(&self.scope))
        {
            return Err(UnitPriceError::config(format!(
                "asset {outside} is outside scope {}",
                self.scope
            )));
        }
        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Offline cache settings
    pub cache: CacheConfig,
    /// Directory holding the static page, served under the cache scope
    pub asset_root: Option<PathBuf>,
    /// File receiving log lines instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a YAML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse and validate YAML text
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(text)?
        };
        config.cache.validate()?;
        Ok(config)
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set cache settings
    #[must_use]
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Set the static asset directory
    #[must_use]
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }

    /// Set the log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}
