//! Bark push notification client
//!
//! This library builds Bark request targets from a [`Notification`] and
//! delivers them with a single GET through [`BarkClient`].

pub mod clients;
pub mod config;
pub mod errors;
pub mod notification;

// Re-export commonly used types for convenience
pub use clients::{BarkClient, DEFAULT_BASE_URL};
pub use config::{BarkConfig, Config, ConfigManager};
pub use errors::{BarkError, BarkResult};
pub use notification::{Level, Notification, DEFAULT_TITLE};
pub use tokio_util::sync::CancellationToken;
