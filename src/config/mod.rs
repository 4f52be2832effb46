use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// When the sample-rate clause joins audio track labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SampleRatePolicy {
    /// Only when labels would otherwise collide
    #[default]
    Auto,
    Always,
    Never,
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default selection preferences
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Label display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Default selection preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Preferred audio language (ISO 639 code)
    pub preferred_language: Option<String>,
    /// Preferred audio channel count, 0 for no preference
    #[serde(default)]
    pub preferred_channel_count: u32,
}

/// Label display settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Sample-rate clause policy for audio labels
    #[serde(default)]
    pub sample_rate: SampleRatePolicy,
}

impl AppConfig {
    /// Load configuration from TOML file, or create default if not found
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config: {}. Using defaults.", e);
                }
            }
        }

        let config = Self::default();
        // Save default config for future editing
        if let Err(e) = config.save() {
            warn!("Failed to save default config: {}", e);
        }
        config
    }

    /// Save configuration to TOML file
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Load configuration from a specific file
    fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default configuration file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trackpick")
            .join("config.toml")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.selection.preferred_language.as_deref() == Some("") {
            return Err(AppError::Config(
                "Preferred language must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
