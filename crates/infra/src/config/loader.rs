//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `BITACORA_DB_PATH` is not set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `BITACORA_DB_PATH`: Database file path (required for env loading)
//! - `BITACORA_DB_POOL_SIZE`: Connection pool size
//! - `BITACORA_SESSION_PATH`: Session side file path
//! - `BITACORA_REPORTS_DIR`: Directory reports are written into
//! - `BITACORA_LOG_LEVEL`: Tracing filter directive
//! - `BITACORA_LOG_JSON`: Emit JSON logs (true/false)
//!
//! Optional variables fall back to the defaults in `bitacora_domain::Config`.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./bitacora.json` or `./bitacora.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use bitacora_common::{CommonError, CommonResult};
use bitacora_domain::{
    BitacoraError, Config, DatabaseConfig, LoggingConfig, ReportConfig, Result, SessionConfig,
};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["config.json", "config.toml", "bitacora.json", "bitacora.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the database path
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `BitacoraError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - An environment variable holds an unparsable value
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `BITACORA_DB_PATH` must be present; every other variable is optional.
///
/// # Errors
/// Returns `BitacoraError::Config` if the database path is missing or a
/// numeric variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("BITACORA_DB_PATH")?;
    let defaults = Config::default();

    let pool_size = match std::env::var("BITACORA_DB_POOL_SIZE") {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|e| BitacoraError::Config(format!("Invalid pool size: {}", e)))?,
        Err(_) => defaults.database.pool_size,
    };

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size },
        session: SessionConfig {
            path: env_or("BITACORA_SESSION_PATH", defaults.session.path),
        },
        report: ReportConfig {
            output_dir: env_or("BITACORA_REPORTS_DIR", defaults.report.output_dir),
        },
        logging: LoggingConfig {
            level: env_or("BITACORA_LOG_LEVEL", defaults.logging.level),
            json: env_bool("BITACORA_LOG_JSON", defaults.logging.json),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `BitacoraError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BitacoraError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BitacoraError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| BitacoraError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let parsed: CommonResult<Config> = match extension {
        "toml" => toml::from_str(contents).map_err(CommonError::from),
        "json" => serde_json::from_str(contents).map_err(CommonError::from),
        other => Err(CommonError::config(format!("Unsupported config format: {other}"))),
    };

    parsed.map_err(|err| InfraError::from(err).into())
}

/// Probe the standard locations for a configuration file
///
/// Searches the current working directory first, then the directory holding
/// the executable. Returns the first existing file.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    probe_dirs(&dirs)
}

fn probe_dirs(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        BitacoraError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable with a fallback; blank values count as unset
fn env_or(key: &str, default: String) -> String {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
