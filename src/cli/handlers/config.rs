//! Configuration management handler
//!
//! Handles `init` and the `config` subcommands.

use crate::cli::{CliContext, ConfigAction};
use anyhow::{Context, Result};
use bark_notify::ConfigManager;

/// Handler for configuration operations
pub struct ConfigHandler<'a> {
    context: &'a CliContext,
}

impl<'a> ConfigHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    /// Handle configuration initialization
    pub fn handle_init(&self, global: bool, force: bool) -> Result<()> {
        let config_path = if global {
            ConfigManager::global_config_path()?
        } else {
            ConfigManager::project_config_path(self.context.project_dir())
        };

        if config_path.exists() && !force {
            println!("Configuration already initialized at: {}", config_path.display());
            println!("Use --force to overwrite");
            return Ok(());
        }

        ConfigManager::reset(&config_path).context("Failed to write configuration")?;
        println!("Configuration initialized successfully at: {}", config_path.display());

        Ok(())
    }

    /// Handle configuration management
    pub fn handle_config(&self, action: ConfigAction) -> Result<()> {
        let mut config_manager = ConfigManager::load(self.context.project_path.as_deref())?;

        match action {
            ConfigAction::Show => {
                println!("# {}", config_manager.path().display());
                println!("{}", toml::to_string_pretty(config_manager.config())?);
            }
            ConfigAction::Set { key, value } => {
                config_manager.set(&key, &value)?;
                config_manager.save()?;
                println!("Configuration updated: {key} = {value}");
            }
            ConfigAction::Get { key } => {
                println!("{}", config_manager.get(&key)?);
            }
        }

        Ok(())
    }
}
