//! CLI context shared by all handlers
//!
//! Holds the resolved project path, the loaded configuration and the
//! command-line overrides for key and server.

use anyhow::Result;
use bark_notify::config::ConfigManager;
use bark_notify::BarkConfig;
use std::path::{Path, PathBuf};

/// CLI execution context containing shared configuration
pub struct CliContext {
    pub project_path: Option<PathBuf>,
    pub verbose: bool,
    pub config_manager: ConfigManager,
    key: Option<String>,
    server: Option<String>,
}

impl CliContext {
    pub fn new(
        project_path: Option<PathBuf>,
        verbose: bool,
        key: Option<String>,
        server: Option<String>,
    ) -> Result<Self> {
        let project_path = Self::resolve_project_path(project_path);
        let config_manager = ConfigManager::load(project_path.as_deref())?;

        Ok(Self {
            project_path,
            verbose,
            config_manager,
            key,
            server,
        })
    }

    /// Auto-detect project path by looking for .bark/config.toml in the current directory
    fn resolve_project_path(project_path: Option<PathBuf>) -> Option<PathBuf> {
        if project_path.is_some() {
            return project_path;
        }

        std::env::current_dir()
            .ok()
            .filter(|dir| ConfigManager::project_config_path(dir).exists())
    }

    /// Project directory used for project-level files, defaulting to the current directory
    pub fn project_dir(&self) -> &Path {
        self.project_path.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// `[bark]` settings with command-line overrides applied
    pub fn bark_config(&self) -> BarkConfig {
        let mut config = self.config_manager.config().bark.clone();
        if let Some(key) = &self.key {
            config.key = key.clone();
        }
        if let Some(server) = &self.server {
            config.server_url = server.clone();
        }
        config
    }

    /// Initialize logging based on verbosity and configuration
    pub fn init_logging(&self) -> Result<()> {
        let log_level = if self.verbose {
            "debug"
        } else {
            self.config_manager.config().logging.level.as_str()
        };

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(
                    log_level
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::INFO.into()),
                ),
            )
            .init();

        if self.verbose {
            tracing::debug!("Verbose logging enabled");
            tracing::debug!("Project path: {:?}", self.project_path);
            tracing::debug!("Config path: {}", self.config_manager.path().display());
        }

        Ok(())
    }
}
