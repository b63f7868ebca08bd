use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scheduling::WizardOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub wizard: WizardOptions,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval; also bounds toast expiry precision
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_page_title")]
    pub page_title: String,
    #[serde(default = "default_table_title")]
    pub table_title: String,
}

fn default_tick_rate() -> u64 {
    250
}

fn default_toast_duration() -> u64 {
    4000
}

fn default_page_title() -> String {
    "Candidates".to_string()
}

fn default_table_title() -> String {
    "Candidate Pipeline".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            toast_duration_ms: default_toast_duration(),
            page_title: default_page_title(),
            table_title: default_table_title(),
        }
    }
}

/// Where candidate and team records come from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Roster file (.toml, .json, .yaml); built-in fixtures when unset
    #[serde(default)]
    pub roster: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Show in-app toasts
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Mirror toasts to the desktop notification center
    #[serde(default)]
    pub desktop: bool,
    #[serde(default)]
    pub sound: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            desktop: false,
            sound: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs to a file in TUI mode (stderr would corrupt the screen)
    #[serde(default = "default_true")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for runtime files such as logs
    #[serde(default = "default_state_path")]
    pub state: String,
}

fn default_state_path() -> String {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("hirepipe").to_string_lossy().to_string())
        .unwrap_or_else(|| ".hirepipe".to_string())
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state: default_state_path(),
        }
    }
}

impl Config {
    /// User config location (~/.config/hirepipe/config.toml)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hirepipe").join("config.toml"))
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so hirepipe works without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables, e.g. HIREPIPE__WIZARD__CONFIRM_STEP=true
        builder = builder.add_source(
            config::Environment::with_prefix("HIREPIPE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Get absolute path to state directory
    pub fn state_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.paths.state);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.state_path().join("logs")
    }

    /// Roster path, resolved against the working directory
    pub fn roster_path(&self) -> Option<PathBuf> {
        self.data.roster.as_ref().map(|roster| {
            let path = PathBuf::from(roster);
            if path.is_absolute() {
                path
            } else {
                std::env::current_dir().unwrap_or_default().join(path)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::DateMode;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.ui.table_title, "Candidate Pipeline");
        assert!(config.notifications.enabled);
        assert!(!config.notifications.desktop);
        assert!(config.wizard.strict_validation);
        assert!(!config.wizard.confirm_step);
        assert!(config.data.roster.is_none());
    }

    #[test]
    fn test_load_explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
[wizard]
confirm_step = true
date_mode = "single"
recurring_slots = true

[ui]
toast_duration_ms = 1500
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert!(config.wizard.confirm_step);
        assert!(config.wizard.recurring_slots);
        assert_eq!(config.wizard.date_mode, DateMode::Single);
        assert_eq!(config.ui.toast_duration_ms, 1500);
        // Untouched sections keep their defaults
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_env_overrides_wizard_flags() {
        // Same values as the file override test so parallel loads agree
        std::env::set_var("HIREPIPE__WIZARD__CONFIRM_STEP", "true");
        std::env::set_var("HIREPIPE__WIZARD__DATE_MODE", "single");
        let loaded = Config::load(None);
        std::env::remove_var("HIREPIPE__WIZARD__CONFIRM_STEP");
        std::env::remove_var("HIREPIPE__WIZARD__DATE_MODE");

        let config = loaded.unwrap();
        assert!(config.wizard.confirm_step);
        assert_eq!(config.wizard.date_mode, DateMode::Single);
    }

    #[test]
    fn test_relative_paths_resolve_against_cwd() {
        let mut config = Config::default();
        config.paths.state = "state-dir".to_string();
        config.data.roster = Some("roster.yaml".to_string());

        assert!(config.state_path().is_absolute());
        assert!(config.logs_path().ends_with("state-dir/logs"));
        assert!(config.roster_path().unwrap().ends_with("roster.yaml"));
    }

    #[test]
    fn test_to_toml_round_trips_wizard_section() {
        let config = Config::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[wizard]"));
        assert!(rendered.contains("strict_validation = true"));
    }
}
