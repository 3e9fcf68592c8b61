use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::clients::DEFAULT_BASE_URL;
use crate::errors::{BarkError, BarkResult};

const CONFIG_DIR: &str = ".bark";
const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bark: BarkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection and default message settings for the Bark server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarkConfig {
    pub server_url: String,
    pub key: String,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub default_sound: Option<String>,
    pub default_icon: Option<String>,
}

impl Default for BarkConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_BASE_URL.to_string(),
            key: String::new(),
            timeout_secs: Some(30),
            user_agent: None,
            default_sound: None,
            default_icon: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration manager
///
/// Loads and saves the TOML configuration file. A project-level file
/// (`<project>/.bark/config.toml`) takes precedence over the global one
/// (`~/.bark/config.toml`).
///
/// # Example
///
/// ```rust,no_run
/// use bark_notify::config::ConfigManager;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let manager = ConfigManager::load(None)?;
///     println!("Server URL: {}", manager.config().bark.server_url);
///     Ok(())
/// }
/// ```
pub struct ConfigManager {
    config_path: PathBuf,
    config: Config,
}

impl ConfigManager {
    /// Dotted keys accepted by [`get`](Self::get) and [`set`](Self::set)
    pub const KEYS: &'static [&'static str] = &[
        "bark.server_url",
        "bark.key",
        "bark.timeout_secs",
        "bark.user_agent",
        "bark.default_sound",
        "bark.default_icon",
        "logging.level",
    ];

    /// Loads the effective configuration without touching disk.
    ///
    /// Uses the project file if it exists, else the global file if it exists,
    /// else defaults bound to the project path (or the global path when no
    /// project is given).
    pub fn load(project_path: Option<&Path>) -> BarkResult<Self> {
        let global_path = Self::global_config_path()?;

        let candidate = match project_path {
            Some(project) => {
                let project_config = Self::project_config_path(project);
                if project_config.exists() || !global_path.exists() {
                    project_config
                } else {
                    global_path
                }
            }
            None => global_path,
        };

        let config = if candidate.exists() {
            Self::read(&candidate)?
        } else {
            Config::default()
        };

        debug!(path = %candidate.display(), "configuration loaded");

        Ok(Self {
            config_path: candidate,
            config,
        })
    }

    /// Loads the file at `path`, writing defaults there first if it is missing
    pub fn load_or_create(path: impl Into<PathBuf>) -> BarkResult<Self> {
        let config_path = path.into();
        let config = if config_path.exists() {
            Self::read(&config_path)?
        } else {
            let manager = Self {
                config_path: config_path.clone(),
                config: Config::default(),
            };
            manager.save()?;
            manager.config
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Replaces the file at `path` with the default configuration
    pub fn reset(path: impl Into<PathBuf>) -> BarkResult<Self> {
        let manager = Self {
            config_path: path.into(),
            config: Config::default(),
        };
        manager.save()?;
        Ok(manager)
    }

    pub fn project_config_path(project: &Path) -> PathBuf {
        project.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    pub fn global_config_path() -> BarkResult<PathBuf> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| BarkError::config("Failed to get base directories"))?;
        Ok(base_dirs.home_dir().join(CONFIG_DIR).join(CONFIG_FILE))
    }

    fn read(path: &Path) -> BarkResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| BarkError::io_with_source(path, "read config file", e))?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the current configuration, creating the parent directory if needed
    pub fn save(&self) -> BarkResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| BarkError::io_with_source(parent, "create config directory", e))?;
        }
        let content = toml::to_string_pretty(&self.config)?;
        fs::write(&self.config_path, content)
            .map_err(|e| BarkError::io_with_source(&self.config_path, "write config file", e))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn unknown_key(key: &str) -> BarkError {
        BarkError::UnknownConfigKey {
            key: key.to_string(),
            valid: Self::KEYS.join(", "),
        }
    }

    /// Reads a value by dotted key. Unset optional values read as an empty string.
    pub fn get(&self, key: &str) -> BarkResult<String> {
        let bark = &self.config.bark;
        let value = match key {
            "bark.server_url" => bark.server_url.clone(),
            "bark.key" => bark.key.clone(),
            "bark.timeout_secs" => bark
                .timeout_secs
                .map(|t| t.to_string())
                .unwrap_or_default(),
            "bark.user_agent" => bark.user_agent.clone().unwrap_or_default(),
            "bark.default_sound" => bark.default_sound.clone().unwrap_or_default(),
            "bark.default_icon" => bark.default_icon.clone().unwrap_or_default(),
            "logging.level" => self.config.logging.level.clone(),
            _ => return Err(Self::unknown_key(key)),
        };
        Ok(value)
    }

    /// Sets a value by dotted key. An empty value clears optional settings.
    pub fn set(&mut self, key: &str, value: &str) -> BarkResult<()> {
        let bark = &mut self.config.bark;
        match key {
            "bark.server_url" => bark.server_url = value.to_string(),
            "bark.key" => bark.key = value.to_string(),
            "bark.timeout_secs" => {
                bark.timeout_secs = if value.is_empty() {
                    None
                } else {
                    Some(
                        value
                            .parse()
                            .map_err(|e| BarkError::invalid_value(key, value, e))?,
                    )
                }
            }
            "bark.user_agent" => bark.user_agent = non_empty(value),
            "bark.default_sound" => bark.default_sound = non_empty(value),
            "bark.default_icon" => bark.default_icon = non_empty(value),
            "logging.level" => {
                value
                    .parse::<tracing::Level>()
                    .map_err(|e| BarkError::invalid_value(key, value, e))?;
                self.config.logging.level = value.to_string();
            }
            _ => return Err(Self::unknown_key(key)),
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
