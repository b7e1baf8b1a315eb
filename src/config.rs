//! Configuration loader/writer plus strongly typed settings structures.
//!
//! Deserializes the single TOML file we ship (`config.toml`), resolves the
//! data directory (flag, environment variable, or home default), and writes
//! the file back when settings change at runtime.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embedded default configuration, written out on first run
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default = "default_theme_name")]
    pub active_theme: String,
    #[serde(skip)] // Resolved at load time, never serialized
    source_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll timeout - lower = snappier redraw, higher CPU
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
    /// Show destination icons in the tab row
    #[serde(default = "default_true")]
    pub show_icons: bool,
    /// Show the status bar at the bottom of the shell
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Route rendered at process start (must be a registered tab)
    #[serde(default = "default_start_route")]
    pub start_route: String,
    /// URI scheme accepted for deep links
    #[serde(default = "default_deep_link_scheme")]
    pub deep_link_scheme: String,
    /// URI host accepted for deep links
    #[serde(default = "default_deep_link_host")]
    pub deep_link_host: String,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_poll_timeout_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

fn default_start_route() -> String {
    "overview".to_string()
}

fn default_deep_link_scheme() -> String {
    "app".to_string()
}

fn default_deep_link_host() -> String {
    "finance".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            show_icons: true,
            show_status_bar: true,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            start_route: default_start_route(),
            deep_link_scheme: default_deep_link_scheme(),
            deep_link_host: default_deep_link_host(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            navigation: NavigationConfig::default(),
            active_theme: default_theme_name(),
            source_path: None,
        }
    }
}

impl Config {
    /// Load configuration from the data directory, creating the file from
    /// the embedded default on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::extract_defaults(&path)?;
        }
        Self::load_from_path(&path)
    }

    /// Load configuration from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Persist the configuration back to where it was loaded from
    pub fn save(&self) -> Result<()> {
        let path = match &self.source_path {
            Some(path) => path.clone(),
            None => Self::config_path()?,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Get the currently active theme, falling back to the default dark
    /// theme when the configured name is unknown.
    pub fn get_theme(&self) -> crate::theme::AppTheme {
        crate::theme::ThemePresets::all()
            .get(&self.active_theme)
            .cloned()
            .unwrap_or_else(crate::theme::ThemePresets::dark)
    }

    /// Base data directory (~/.tally), overridable with TALLY_DIR
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("TALLY_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".tally"))
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Write the embedded default config (idempotent - only creates the
    /// file when missing)
    fn extract_defaults(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write default config: {:?}", path))?;
        tracing::info!("Created default config at {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.navigation.start_route, "overview");
        assert_eq!(config.navigation.deep_link_scheme, "app");
        assert_eq!(config.active_theme, "dark");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.poll_timeout_ms, 250);
        assert!(config.ui.show_icons);
        assert_eq!(config.navigation.deep_link_host, "finance");
    }

    #[test]
    fn test_partial_config_overrides() {
        let config: Config = toml::from_str(
            r#"
            active_theme = "mint"

            [navigation]
            start_route = "bills"
            "#,
        )
        .unwrap();
        assert_eq!(config.active_theme, "mint");
        assert_eq!(config.navigation.start_route, "bills");
        // Untouched sections keep their defaults
        assert!(config.ui.show_status_bar);
    }

    #[test]
    fn test_default_start_route_is_registered() {
        let config = Config::default();
        let registry = crate::core::AppCore::build_registry();
        assert!(registry.resolve(&config.navigation.start_route).is_ok());
    }
}
