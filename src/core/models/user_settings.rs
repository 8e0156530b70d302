use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemePreference::Light => write!(f, "Light"),
            ThemePreference::Dark => write!(f, "Dark"),
            ThemePreference::System => write!(f, "System"),
        }
    }
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn resolve(self, system_prefers_dark: bool) -> ThemeMode {
        match self {
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::System if system_prefers_dark => ThemeMode::Dark,
            ThemePreference::System => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light | ThemePreference::System => ThemePreference::Dark,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default)]
    pub theme_preference: ThemePreference,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    global_constants::DEFAULT_API_BASE_URL.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme_preference: ThemePreference::default(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl UserSettings {
    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Theme preference: {}", settings.theme_preference);
        log::debug!("[SETTINGS] API base URL: {}", settings.api_base_url);

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn default_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }

    pub fn effective_api_base_url(&self, env_override: Option<String>) -> String {
        let base_url = env_override
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| self.api_base_url.clone());

        base_url.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_preference_default_is_system() {
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }

    #[test]
    fn test_resolve_follows_system_only_for_system_preference() {
        assert_eq!(ThemePreference::System.resolve(true), ThemeMode::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ThemeMode::Light);
        assert_eq!(ThemePreference::Light.resolve(true), ThemeMode::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_switches_between_light_and_dark() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::System.toggled(), ThemePreference::Dark);
    }

    #[test]
    fn test_theme_preference_serialization() {
        let serialized = serde_json::to_string(&ThemePreference::System).unwrap();
        assert_eq!(serialized, "\"System\"");

        let theme: ThemePreference = serde_json::from_str("\"Light\"").unwrap();
        assert_eq!(theme, ThemePreference::Light);
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(settings.theme_preference, ThemePreference::System);
        assert_eq!(settings.api_base_url, global_constants::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_user_settings_deserialization_with_missing_fields() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_effective_api_base_url_prefers_environment() {
        let settings = UserSettings::default();

        assert_eq!(
            settings.effective_api_base_url(Some("https://ocr.example.com/".to_string())),
            "https://ocr.example.com"
        );
        assert_eq!(
            settings.effective_api_base_url(Some("   ".to_string())),
            global_constants::DEFAULT_API_BASE_URL
        );
        assert_eq!(
            settings.effective_api_base_url(None),
            global_constants::DEFAULT_API_BASE_URL
        );
    }

    #[test]
    fn test_load_creates_defaults_when_missing() {
        let temp_dir = std::env::temp_dir().join("myanmar-ocr-settings-missing-test");
        std::fs::remove_dir_all(&temp_dir).ok();
        let settings_path = temp_dir.join("settings.json");

        let settings = UserSettings::load_from(&settings_path).unwrap();

        assert_eq!(settings, UserSettings::default());
        assert!(settings_path.exists());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_user_settings_save_and_load_roundtrip() {
        let temp_dir = std::env::temp_dir().join("myanmar-ocr-settings-roundtrip-test");
        let settings_path = temp_dir.join("settings.json");

        let original_settings = UserSettings {
            theme_preference: ThemePreference::Dark,
            api_base_url: "http://10.0.0.5:8000".to_string(),
        };

        original_settings.save_to(&settings_path).unwrap();
        let loaded_settings = UserSettings::load_from(&settings_path).unwrap();

        assert_eq!(loaded_settings, original_settings);

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let temp_dir = std::env::temp_dir().join("myanmar-ocr-settings-corrupt-test");
        std::fs::create_dir_all(&temp_dir).unwrap();
        let settings_path = temp_dir.join("settings.json");
        std::fs::write(&settings_path, "{ not json").unwrap();

        assert!(UserSettings::load_from(&settings_path).is_err());

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
