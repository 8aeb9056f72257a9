//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.watchlist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};


// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WatchlistConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_route: Option<String>,
    pub catalog_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub animations: Option<bool>,
    pub tick_rate_ms: Option<u64>,
    pub idle_poll_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_TICK_RATE_MS: u64 = 80;
pub const DEFAULT_IDLE_POLL_MS: u64 = 500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Raw route string to open on top of the watchlist, if any
    pub start_route: Option<String>,
    /// `None` means the built-in catalog.
    pub catalog_file: Option<PathBuf>,
    pub log_level: String,
    pub animations: bool,
    pub tick_rate_ms: u64,
    pub idle_poll_ms: u64,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub route: Option<String>,
    pub catalog: Option<PathBuf>,
    pub log_level: Option<String>,
    pub no_animations: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.watchlist/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".watchlist"))
}

/// Returns the path to `~/.watchlist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.watchlist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WatchlistConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WatchlistConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WatchlistConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WatchlistConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<WatchlistConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WatchlistConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Watchlist Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_route = "watchlistScreen"     # or "detailScreen/<movie id>"
# catalog_file = "movies.json"        # JSON array of movies; relative to ~/.watchlist/
# log_level = "debug"                 # "error", "warn", "info", "debug", "trace", "off"

# [ui]
# animations = true                   # animate the details panel in and out
# tick_rate_ms = 80                   # redraw interval while animating
# idle_poll_ms = 500                  # input poll interval when idle
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WatchlistConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, &process_env)
}

/// `resolve` with an explicit environment lookup.
pub fn resolve_with_env(
    config: &WatchlistConfig,
    cli: &CliOverrides,
    env: &dyn Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start route: CLI → env → config. Parsed when dispatched, not here.
    let start_route = cli
        .route
        .clone()
        .or_else(|| env("WATCHLIST_START_ROUTE"))
        .or_else(|| config.general.start_route.clone());

    // Catalog: CLI path as given, env/config paths relative to ~/.watchlist/
    let catalog_file = cli.catalog.clone().or_else(|| {
        env("WATCHLIST_CATALOG")
            .or_else(|| config.general.catalog_file.clone())
            .map(|file| resolve_data_path(&file))
    });

    let log_level = log_level_with_env(config, cli, env);

    let animations = !cli.no_animations && config.ui.animations.unwrap_or(true);

    ResolvedConfig {
        start_route,
        catalog_file,
        log_level,
        animations,
        tick_rate_ms: config.ui.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS).max(1),
        idle_poll_ms: config.ui.idle_poll_ms.unwrap_or(DEFAULT_IDLE_POLL_MS).max(1),
    }
}

/// Log level alone: CLI → env → config → default.
///
/// Needed before the logger exists, so it can be resolved ahead of the rest.
pub fn log_level(config: &WatchlistConfig, cli: &CliOverrides) -> String {
    log_level_with_env(config, cli, &process_env)
}

fn log_level_with_env(
    config: &WatchlistConfig,
    cli: &CliOverrides,
    env: &dyn Fn(&str) -> Option<String>,
) -> String {
    cli.log_level
        .clone()
        .or_else(|| env("WATCHLIST_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Absolute paths pass through; relative ones are anchored at `~/.watchlist/`.
fn resolve_data_path(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
