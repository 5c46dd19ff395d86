//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.roster/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::codec::Encoding;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub encoding: Option<Encoding>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub encoding: Encoding,
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

/// Returns the path to `~/.roster/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roster").join("config.toml"))
}

/// Load config from `~/.roster/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RosterConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RosterConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RosterConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RosterConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: RosterConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Roster Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# encoding = "json"    # "json" (structured results list) or "plain" (joined string)
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
///
/// `cli_encoding` is from the `--encoding` flag (None = not specified).
pub fn resolve(config: &RosterConfig, cli_encoding: Option<Encoding>) -> ResolvedConfig {
    // Encoding: CLI → env → config → default
    let encoding = cli_encoding
        .or_else(encoding_from_env)
        .or(config.general.encoding)
        .unwrap_or_default();

    ResolvedConfig { encoding }
}

fn encoding_from_env() -> Option<Encoding> {
    let value = std::env::var("ROSTER_ENCODING").ok()?;
    match value.to_ascii_lowercase().as_str() {
        "plain" => Some(Encoding::Plain),
        "json" => Some(Encoding::Json),
        other => {
            warn!("Ignoring unrecognized ROSTER_ENCODING value: {other:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = RosterConfig::default();
        assert!(config.general.encoding.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = RosterConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.encoding, Encoding::Json);
    }

    #[test]
    fn test_resolve_config_value_overrides_default() {
        let config = RosterConfig {
            general: GeneralConfig {
                encoding: Some(Encoding::Plain),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.encoding, Encoding::Plain);
    }

    #[test]
    fn test_resolve_cli_encoding_wins() {
        let config = RosterConfig {
            general: GeneralConfig {
                encoding: Some(Encoding::Plain),
            },
        };
        let resolved = resolve(&config, Some(Encoding::Json));
        assert_eq!(resolved.encoding, Encoding::Json);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
encoding = "plain"
"#;
        let config: RosterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.encoding, Some(Encoding::Plain));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // An empty file is a valid config — everything stays default.
        let config: RosterConfig = toml::from_str("").unwrap();
        assert!(config.general.encoding.is_none());
    }

    #[test]
    fn test_unknown_encoding_value_is_a_parse_error() {
        let toml_str = r#"
[general]
encoding = "xml"
"#;
        assert!(toml::from_str::<RosterConfig>(toml_str).is_err());
    }
}
