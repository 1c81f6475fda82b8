//! # Configuration
//!
//! Centralizes app settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.punchlist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::item::SectionKind;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PunchlistConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Checklist file to load on startup. Absent = built-in checklist.
    pub data_file: Option<String>,
    /// Write edits back to the data file on exit.
    pub autosave: Option<bool>,
    /// Section to focus on startup ("home" or "office").
    pub start_focus: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_AUTOSAVE: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_file: Option<PathBuf>,
    pub autosave: bool,
    pub focus: Option<SectionKind>,
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

/// Returns the path to `~/.punchlist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".punchlist").join("config.toml"))
}

/// Load config from `~/.punchlist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PunchlistConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PunchlistConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PunchlistConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PunchlistConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PunchlistConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Punchlist Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "/home/me/checklist.toml"   # Or set PUNCHLIST_DATA env var
# autosave = true                         # Write edits back on exit
# start_focus = "home"                    # "home" or "office"
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
/// `cli_data` / `cli_focus` / `cli_read_only` come from CLI flags.
pub fn resolve(
    config: &PunchlistConfig,
    cli_data: Option<PathBuf>,
    cli_focus: Option<SectionKind>,
    cli_read_only: bool,
) -> ResolvedConfig {
    // Data file: CLI → env → config → none (built-in checklist)
    let data_file = cli_data
        .or_else(|| std::env::var("PUNCHLIST_DATA").ok().map(PathBuf::from))
        .or_else(|| config.general.data_file.clone().map(PathBuf::from));

    // Autosave: --read-only forces it off; otherwise config → default
    let autosave = if cli_read_only {
        false
    } else {
        config.general.autosave.unwrap_or(DEFAULT_AUTOSAVE)
    };

    // Focus: CLI → config. A bad section name in the config is warned about
    // and ignored rather than failing startup.
    let focus = cli_focus.or_else(|| match &config.general.start_focus {
        Some(name) => match name.parse::<SectionKind>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                warn!("Ignoring start_focus: {}", e);
                None
            }
        },
        None => None,
    });

    ResolvedConfig {
        data_file,
        autosave,
        focus,
    }
}
