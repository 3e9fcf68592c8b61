//! Command definitions and structures for the CLI
//!
//! This module contains the clap-based command line argument definitions.

use bark_notify::Level;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "bark")]
#[command(about = "Send push notifications through a Bark server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project path for project-level configuration
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Device key, overrides the configured one
    #[arg(long, global = true, env = "BARK_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Server URL, overrides the configured one
    #[arg(long, global = true, env = "BARK_SERVER")]
    pub server: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send a notification
    Send(SendArgs),

    /// Initialize configuration
    Init {
        /// Initialize global configuration (default is project-level)
        #[arg(short, long)]
        global: bool,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Configure settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    /// Notification body
    pub body: String,

    #[arg(short, long)]
    pub title: Option<String>,

    /// Only used together with a title
    #[arg(short = 'u', long)]
    pub subtitle: Option<String>,

    /// Icon URL (iOS 15+)
    #[arg(short, long)]
    pub icon: Option<String>,

    /// Sound name, e.g. "bell"
    #[arg(short, long)]
    pub sound: Option<String>,

    /// Interruption level (active, timeSensitive, passive, critical)
    #[arg(short, long)]
    pub level: Option<Level>,

    /// Mark the notification time-sensitive
    #[arg(long)]
    pub time_sensitive: bool,

    /// Send as a critical alert
    #[arg(long)]
    pub critical: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the request target instead of sending
    #[arg(long)]
    pub dry_run: bool,
}

/// Configuration management actions
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set configuration value
    Set {
        /// Configuration key (e.g., bark.server_url)
        key: String,
        /// Value to set
        value: String,
    },

    /// Get configuration value
    Get {
        /// Configuration key
        key: String,
    },
}
