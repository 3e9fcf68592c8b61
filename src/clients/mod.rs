//! Bark client module
//!
//! The client is split in two:
//!
//! - **target**: pure construction of the request target from a notification
//! - **bark**: the [`BarkClient`] that issues the GET and classifies the status
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bark_notify::{BarkClient, Notification};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), bark_notify::BarkError> {
//! let client = BarkClient::new("", "YOUR_BARK_KEY")?;
//!
//! client.send_text("Hello from Bark!").await?;
//!
//! let meeting = Notification::new("Important meeting in 5 minutes!")
//!     .with_title("Meeting Reminder")
//!     .with_subtitle("Team Standup")
//!     .with_sound("bell")
//!     .time_sensitive();
//! client.send(&meeting).await?;
//! # Ok(())
//! # }
//! ```

pub mod bark;
pub mod target;

pub use bark::{BarkClient, DEFAULT_BASE_URL};
pub use target::build_target;
