//! Command handlers for all CLI operations

pub mod config;
pub mod send;

use super::{CliContext, Commands};
use anyhow::Result;

pub use config::ConfigHandler;
pub use send::SendHandler;

/// Routes parsed commands to their handlers
pub struct CommandHandler {
    context: CliContext,
}

impl CommandHandler {
    pub fn new(context: CliContext) -> Self {
        Self { context }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Send(args) => SendHandler::new(&self.context).handle_send(args).await,
            Commands::Init { global, force } => {
                ConfigHandler::new(&self.context).handle_init(global, force)
            }
            Commands::Config { action } => ConfigHandler::new(&self.context).handle_config(action),
        }
    }
}
