//! Send notification handler

use crate::cli::{CliContext, SendArgs};
use anyhow::{Context, Result};
use bark_notify::{BarkClient, BarkConfig, BarkError, CancellationToken, Notification};
use tracing::{debug, warn};

/// Handler for the `send` command
pub struct SendHandler<'a> {
    context: &'a CliContext,
}

impl<'a> SendHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    pub async fn handle_send(&self, args: SendArgs) -> Result<()> {
        let mut bark = self.context.bark_config();
        if args.timeout.is_some() {
            bark.timeout_secs = args.timeout;
        }

        let client = BarkClient::from_config(&bark).context("Failed to create Bark client")?;
        let dry_run = args.dry_run;
        let notification = build_notification(args, &bark);

        if notification.body().is_empty() {
            return Err(BarkError::EmptyBody.into());
        }

        if dry_run {
            println!("Dry run - would send notification to:");
            println!("{}", client.target_for(&notification));
            return Ok(());
        }

        let cancel = CancellationToken::new();
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling notification");
                on_interrupt.cancel();
            }
        });

        client
            .send_with_cancel(&cancel, &notification)
            .await
            .context("Failed to send notification")?;

        debug!(server = %client.base_url(), "notification delivered");
        println!("Notification sent successfully");
        Ok(())
    }
}

/// Apply config defaults first so explicit flags override them
fn build_notification(args: SendArgs, bark: &BarkConfig) -> Notification {
    let mut notification = Notification::new(args.body);

    if let Some(sound) = &bark.default_sound {
        notification = notification.with_sound(sound);
    }
    if let Some(icon) = &bark.default_icon {
        notification = notification.with_icon(icon);
    }

    if let Some(title) = args.title {
        notification = notification.with_title(title);
    }
    if let Some(subtitle) = args.subtitle {
        notification = notification.with_subtitle(subtitle);
    }
    if let Some(icon) = args.icon {
        notification = notification.with_icon(icon);
    }
    if let Some(sound) = args.sound {
        notification = notification.with_sound(sound);
    }
    if let Some(level) = args.level {
        notification = notification.with_level(level);
    }
    if args.time_sensitive {
        notification = notification.time_sensitive();
    }
    if args.critical {
        notification = notification.critical();
    }

    notification
}
