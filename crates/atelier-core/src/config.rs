//! Application configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for an override file (explicit path, `ATELIER_CONFIG`, or
//!    ~/.config/atelier/atelier.toml)
//! 2. Fall back to built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable naming a config override file
pub const CONFIG_ENV: &str = "ATELIER_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtelierConfig {
    /// Path to the SQLite database file
    pub database: String,
    pub server: ServerSection,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    /// Whether the API requires a bearer key (secure by default)
    pub require_auth: bool,
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Bearer keys accepted by the auth middleware
    pub api_keys: Vec<String>,
}

impl Default for AtelierConfig {
    fn default() -> Self {
        Self {
            database: "atelier.db".to_string(),
            server: ServerSection::default(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            require_auth: true,
            allowed_origins: vec![],
            api_keys: vec![],
        }
    }
}

impl AtelierConfig {
    /// Load configuration.
    ///
    /// An explicitly passed path must exist; the env-var and default
    /// locations are optional and silently fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(Path::new(&env_path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("Invalid config {}: {}", path.display(), e)))
    }

    /// Default override location: ~/.config/atelier/atelier.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("atelier").join("atelier.toml"))
    }
}
