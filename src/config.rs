use crate::model::catalog::ServiceKey;
use crate::model::progress::ProgressVariant;
use crate::model::ui::Theme;
use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial colour theme
    pub theme: Theme,
    /// Tab selected when the page opens
    #[serde(deserialize_with = "lenient_service_key")]
    pub start_tab: ServiceKey,
    /// Checkpoint schedule for the live demo
    pub progress_variant: ProgressVariant,
    /// Whether closing the demo stops an analysis that is still running
    pub cancel_analysis_on_close: bool,
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    pub show_splash: bool,
}

/// Unknown tab names fall back to the default tab instead of failing the load
fn lenient_service_key<'de, D>(deserializer: D) -> Result<ServiceKey, D::Error>
where
    D: Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    Ok(ServiceKey::from_key_or_default(&key))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            start_tab: ServiceKey::Analysis,
            progress_variant: ProgressVariant::Stepped,
            cancel_analysis_on_close: false,
            tick_rate_ms: 100,
            show_splash: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".metrology-ai"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Poll timeout, never below 10ms
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Load the config file
    ///
    /// Returns `Ok(None)` when there is no file, and an error when the file
    /// exists but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Option<Config>> {
        let Some(config_path) = Self::config_path() else {
            return Ok(None);
        };
        if !config_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(Some(config))
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::from_json(r#"{ "theme": "light", "start_tab": "reporting" }"#).unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.start_tab, ServiceKey::Reporting);
        assert_eq!(config.progress_variant, ProgressVariant::Stepped);
        assert!(!config.cancel_analysis_on_close);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_full_config_roundtrip_through_json() {
        let config = Config {
            theme: Theme::Light,
            start_tab: ServiceKey::Optimization,
            progress_variant: ProgressVariant::Simplified,
            cancel_analysis_on_close: true,
            tick_rate_ms: 50,
            show_splash: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""progress_variant":"simplified""#));
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_unknown_tab_falls_back_to_default() {
        let config = Config::from_json(r#"{ "start_tab": "pricing", "theme": "light" }"#).unwrap();
        assert_eq!(config.start_tab, ServiceKey::Analysis);
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::from_json(r#"{ "theme": "sepia" }"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn test_tick_rate_floor() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }
}
