//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.globestay/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlobestayConfig {
    #[serde(default)]
    pub guide: GuideConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Settings for the local-guide text-generation call.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GuideConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// Artificial latencies of the simulated reservation backend.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub search_latency_ms: Option<u64>,
    pub booking_latency_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GUIDE_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_SEARCH_LATENCY_MS: u64 = 1_000;
pub const DEFAULT_BOOKING_LATENCY_MS: u64 = 2_000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub guide_model: String,
    pub search_latency: Duration,
    pub booking_latency: Duration,
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

/// Returns the path to `~/.globestay/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".globestay").join("config.toml"))
}

/// Load config from `~/.globestay/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GlobestayConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GlobestayConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GlobestayConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GlobestayConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: GlobestayConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Globestay Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [guide]
# api_key = "AIza..."               # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com"
# model = "gemini-2.5-flash"

# [simulation]
# search_latency_ms = 1000
# booking_latency_ms = 2000
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

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &GlobestayConfig) -> ResolvedConfig {
    // API key: env → config (None means the guide call degrades to apology)
    let gemini_api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .or_else(|| config.guide.api_key.clone());

    // Base URL: env → config → default
    let gemini_base_url = std::env::var("GEMINI_BASE_URL")
        .ok()
        .or_else(|| config.guide.base_url.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());

    // Model: env → config → default
    let guide_model = std::env::var("GLOBESTAY_MODEL")
        .ok()
        .or_else(|| config.guide.model.clone())
        .unwrap_or_else(|| DEFAULT_GUIDE_MODEL.to_string());

    ResolvedConfig {
        gemini_api_key,
        gemini_base_url,
        guide_model,
        search_latency: Duration::from_millis(
            config.simulation.search_latency_ms.unwrap_or(DEFAULT_SEARCH_LATENCY_MS),
        ),
        booking_latency: Duration::from_millis(
            config.simulation.booking_latency_ms.unwrap_or(DEFAULT_BOOKING_LATENCY_MS),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = GlobestayConfig::default();
        assert!(config.guide.api_key.is_none());
        assert!(config.simulation.search_latency_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&GlobestayConfig::default());
        assert_eq!(resolved.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(resolved.guide_model, DEFAULT_GUIDE_MODEL);
        assert_eq!(resolved.search_latency, Duration::from_millis(1_000));
        assert_eq!(resolved.booking_latency, Duration::from_millis(2_000));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GlobestayConfig {
            guide: GuideConfig {
                api_key: Some("test-key".to_string()),
                base_url: Some("http://localhost:9000".to_string()),
                model: Some("test-model".to_string()),
            },
            simulation: SimulationConfig {
                search_latency_ms: Some(5),
                booking_latency_ms: Some(10),
            },
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.gemini_base_url, "http://localhost:9000");
        assert_eq!(resolved.guide_model, "test-model");
        assert_eq!(resolved.search_latency, Duration::from_millis(5));
        assert_eq!(resolved.booking_latency, Duration::from_millis(10));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[guide]
api_key = "AIza-test"
model = "gemini-2.5-flash"

[simulation]
search_latency_ms = 250
"#;
        let config: GlobestayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.guide.api_key.as_deref(), Some("AIza-test"));
        assert_eq!(config.guide.model.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(config.simulation.search_latency_ms, Some(250));
        assert!(config.simulation.booking_latency_ms.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[simulation]
booking_latency_ms = 0
"#;
        let config: GlobestayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.simulation.booking_latency_ms, Some(0));
        assert!(config.guide.api_key.is_none());
    }
}
