//! Configuration model.

use crate::models::media::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog owner details.
    pub owner: OwnerConfig,
    /// Directory scanning defaults.
    pub scan: ScanConfig,
}

/// Catalog owner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerConfig {
    /// Display name of the catalog.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
}

/// Scanning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Language given to scanned works.
    pub default_language: Language,
    /// Studio given to scanned works.
    pub default_studio: String,
    /// Treat top-level subdirectories as TV shows.
    pub shows_from_subdirectories: bool,
}

/// Environment variable supplying the default owner email.
pub const OWNER_EMAIL_ENV: &str = "MEDIA_CATALOG_OWNER_EMAIL";

impl OwnerConfig {
    /// Default owner with the given email.
    pub fn with_email(email: Option<String>) -> Self {
        Self {
            name: crate::core::catalog::DEFAULT_NAME.to_string(),
            email,
        }
    }
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self::with_email(std::env::var(OWNER_EMAIL_ENV).ok())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_language: Language::English,
            default_studio: "Unknown".to_string(),
            shows_from_subdirectories: true,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_catalog")
}

/// Load configuration from the user's config directory.
pub fn load_config() -> Config {
    load_config_from(&dirs_config_path().join("config.toml"))
}

/// Load configuration from `path`, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_config_from(path: &Path) -> Config {
    if path.exists() {
        match std::fs::read_to_string(path)
            .map_err(crate::Error::from)
            .and_then(|content| toml::from_str(&content).map_err(crate::Error::from))
        {
            Ok(config) => return config,
            Err(e) => tracing::warn!("Ignoring config {}: {}", path.display(), e),
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[owner]\nname = \"Home\"\n\n[scan]\ndefault_language = \"french\"\n",
        )
        .unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.owner.name, "Home");
        assert_eq!(config.scan.default_language, Language::French);
        assert_eq!(config.scan.default_studio, "Unknown");
        assert!(config.scan.shows_from_subdirectories);
    }

    #[test]
    fn test_display_language_names_parse() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[owner]\nname = \"Home\"\n\n[scan]\ndefault_language = \"English\"\n",
        )
        .unwrap();
        let config = load_config_from(&path);
        assert_eq!(config.owner.name, "Home");
        assert_eq!(config.scan.default_language, Language::English);

        std::fs::write(&path, "[scan]\ndefault_language = \"Klingon\"\n").unwrap();
        let config = load_config_from(&path);
        assert_eq!(
            config.scan.default_language,
            Language::Other("Klingon".to_string())
        );
    }

    #[test]
    fn test_config_round_trips_language_name() {
        let mut config = Config::default();
        config.scan.default_language = Language::Other("Tagalog".to_string());
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("default_language = \"Tagalog\""));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.scan.default_language, config.scan.default_language);
    }

    #[test]
    fn test_owner_email_default_from_env() {
        std::env::set_var(OWNER_EMAIL_ENV, "env@example.com");
        let owner = OwnerConfig::default();
        std::env::remove_var(OWNER_EMAIL_ENV);
        assert_eq!(owner.email.as_deref(), Some("env@example.com"));
        assert_eq!(owner.name, "Default");
    }

    #[test]
    fn test_broken_config_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "owner = [").unwrap();
        assert_eq!(load_config_from(&path).owner.name, "Default");
    }
}
