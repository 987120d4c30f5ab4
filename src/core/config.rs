//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.voyage/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::animation::DEFAULT_DURATION;
use crate::core::catalog::{Catalog, Destination};

// ============================================================================
// Enums shared with the CLI
// ============================================================================

/// Which screen the app opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Hello,
    Home,
    #[default]
    Destinations,
}

/// Terminal colour scheme; decides status bar contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Screen {
    fn parse(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s, true).ok()
    }
}

impl Theme {
    fn parse(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s, true).ok()
    }
}

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VoyageConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_screen: Option<Screen>,
    pub theme: Option<Theme>,
    pub animation_ms: Option<u64>,
    pub panel_rows: Option<u16>,
    pub currency_suffix: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PANEL_ROWS: u16 = 4;
/// Allowed range for `panel_rows`; anything outside is clamped.
pub const MIN_PANEL_ROWS: u16 = 1;
pub const MAX_PANEL_ROWS: u16 = 20;
pub const DEFAULT_CURRENCY_SUFFIX: &str = "D";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub screen: Screen,
    pub theme: Theme,
    pub animation: Duration,
    pub panel_rows: u16,
    pub currency_suffix: String,
    pub catalog: Catalog,
}

/// CLI flags that take part in resolution (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub screen: Option<Screen>,
    pub theme: Option<Theme>,
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

/// Returns the path to `~/.voyage/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".voyage").join("config.toml"))
}

/// Load config from `~/.voyage/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VoyageConfig::default()`.
pub fn load_config() -> Result<VoyageConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(VoyageConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<VoyageConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(VoyageConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: VoyageConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Voyage Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_screen = "destinations"    # "hello", "home" or "destinations"
# theme = "dark"                     # "dark" or "light"
# animation_ms = 320                 # description panel transition
# panel_rows = 4                     # fully expanded panel height (1-20)
# currency_suffix = "D"

# Listing any destination replaces the built-in catalog.
# [[destinations]]
# id = 1
# name = "Kunta Kinteh Island"
# price = 5000
# rating = "4.8"
# image = "kunta-kinteh"
# description = "A historical heritage site."
"#;

fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &VoyageConfig, cli: CliOverrides) -> ResolvedConfig {
    // Screen: CLI → env → config → default
    let screen = cli
        .screen
        .or_else(|| std::env::var("VOYAGE_SCREEN").ok().and_then(|s| Screen::parse(&s)))
        .or(config.general.default_screen)
        .unwrap_or_default();

    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| std::env::var("VOYAGE_THEME").ok().and_then(|s| Theme::parse(&s)))
        .or(config.general.theme)
        .unwrap_or_default();

    let animation = config
        .general
        .animation_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DURATION);

    ResolvedConfig {
        screen,
        theme,
        animation,
        panel_rows: resolve_panel_rows(config.general.panel_rows),
        currency_suffix: config
            .general
            .currency_suffix
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY_SUFFIX.to_string()),
        catalog: resolve_catalog(&config.destinations),
    }
}

fn resolve_panel_rows(configured: Option<u16>) -> u16 {
    let rows = configured.unwrap_or(DEFAULT_PANEL_ROWS);
    let clamped = rows.clamp(MIN_PANEL_ROWS, MAX_PANEL_ROWS);
    if clamped != rows {
        warn!(
            "panel_rows = {} is out of range, using {} ({}..={})",
            rows, clamped, MIN_PANEL_ROWS, MAX_PANEL_ROWS
        );
    }
    clamped
}

/// Configured destinations win when present and valid; otherwise the
/// built-in catalog is used.
fn resolve_catalog(entries: &[Destination]) -> Catalog {
    if entries.is_empty() {
        return Catalog::builtin();
    }
    match Catalog::new(entries.to_vec()) {
        Ok(catalog) => {
            info!("Using {} configured destinations", catalog.len());
            catalog
        }
        Err(e) => {
            warn!("Ignoring configured destinations: {}", e);
            Catalog::builtin()
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&VoyageConfig::default(), CliOverrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = VoyageConfig::default();
        assert!(config.destinations.is_empty());
        assert!(config.general.default_screen.is_none());
    }

    #[test]
    fn test_template_is_valid_toml() {
        let config: VoyageConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(config.destinations.is_empty());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = VoyageConfig {
            general: GeneralConfig {
                default_screen: Some(Screen::Home),
                theme: Some(Theme::Light),
                animation_ms: Some(500),
                panel_rows: Some(6),
                currency_suffix: Some("GMD".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.animation, Duration::from_millis(500));
        assert_eq!(resolved.panel_rows, 6);
        assert_eq!(resolved.currency_suffix, "GMD");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = VoyageConfig {
            general: GeneralConfig {
                default_screen: Some(Screen::Home),
                theme: Some(Theme::Light),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            screen: Some(Screen::Hello),
            theme: Some(Theme::Dark),
        };
        let resolved = resolve(&config, cli);
        assert_eq!(resolved.screen, Screen::Hello);
        assert_eq!(resolved.theme, Theme::Dark);
    }

    #[test]
    fn test_configured_destinations_replace_builtin() {
        let toml_str = r#"
[general]
panel_rows = 3

[[destinations]]
id = 10
name = "Abuko Nature Reserve"
price = 2500
rating = "4.6"
image = "abuko"
description = "Monkeys and crocodiles."
"#;
        let config: VoyageConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.catalog.len(), 1);
        assert_eq!(resolved.catalog.first().id, 10);
        assert_eq!(resolved.panel_rows, 3);
    }

    #[test]
    fn test_panel_rows_are_clamped() {
        let config: VoyageConfig = toml::from_str("[general]\npanel_rows = 65535\n").unwrap();
        assert_eq!(resolve(&config, CliOverrides::default()).panel_rows, MAX_PANEL_ROWS);

        let config: VoyageConfig = toml::from_str("[general]\npanel_rows = 0\n").unwrap();
        assert_eq!(resolve(&config, CliOverrides::default()).panel_rows, MIN_PANEL_ROWS);

        let config: VoyageConfig = toml::from_str("[general]\npanel_rows = 20\n").unwrap();
        assert_eq!(resolve(&config, CliOverrides::default()).panel_rows, 20);
    }

    #[test]
    fn test_invalid_destinations_fall_back_to_builtin() {
        let toml_str = r#"
[[destinations]]
id = 1
name = "A"
price = 100
rating = "4"
image = "a"
description = ""

[[destinations]]
id = 1
name = "B"
price = 200
rating = "4"
image = "b"
description = ""
"#;
        let config: VoyageConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.catalog, Catalog::builtin());
    }

    #[test]
    fn test_screen_names_are_lowercase() {
        let config: VoyageConfig = toml::from_str("[general]\ndefault_screen = \"hello\"\n").unwrap();
        assert_eq!(config.general.default_screen, Some(Screen::Hello));
        assert_eq!(Screen::parse("HOME"), Some(Screen::Home));
        assert_eq!(Theme::parse("nope"), None);
    }

    #[test]
    fn test_missing_file_generates_template() {
        let dir = std::env::temp_dir().join(format!("voyage-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.destinations.is_empty());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Voyage Configuration"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("voyage-bad-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\npanel_rows = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
