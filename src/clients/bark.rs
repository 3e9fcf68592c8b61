use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use super::target::{build_target, is_dot_segment, path_segments};
use crate::config::BarkConfig;
use crate::errors::{BarkError, BarkResult};
use crate::notification::Notification;

/// Endpoint used when no server URL is configured
pub const DEFAULT_BASE_URL: &str = "https://api.day.app";

/// Bark API client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BarkClient {
    client: Client,
    base_url: String,
    key: String,
}

impl BarkClient {
    /// Create a client for `key`. An empty `base_url` selects [`DEFAULT_BASE_URL`].
    pub fn new(base_url: impl Into<String>, key: impl Into<String>) -> BarkResult<Self> {
        Self::build(base_url.into(), key.into(), None, None)
    }

    /// Create a client from the `[bark]` config section
    pub fn from_config(config: &BarkConfig) -> BarkResult<Self> {
        Self::build(
            config.server_url.clone(),
            config.key.clone(),
            config.timeout_secs,
            config.user_agent.clone(),
        )
    }

    fn build(
        base_url: String,
        key: String,
        timeout_secs: Option<u64>,
        user_agent: Option<String>,
    ) -> BarkResult<Self> {
        let base_url = if base_url.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            base_url
        };

        if key.is_empty() {
            return Err(BarkError::config("bark key is required"));
        }

        let mut client_builder = Client::builder()
            .tcp_keepalive(Duration::from_secs(60))
            .pool_idle_timeout(Duration::from_secs(90));

        if let Some(secs) = timeout_secs {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }
        let user_agent = user_agent
            .unwrap_or_else(|| concat!("bark-notify/", env!("CARGO_PKG_VERSION")).to_string());
        client_builder = client_builder.user_agent(user_agent);

        let client = client_builder
            .build()
            .map_err(|e| BarkError::config_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            base_url,
            key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Request target the notification would be sent to
    pub fn target_for(&self, notification: &Notification) -> String {
        build_target(&self.base_url, &self.key, notification)
    }

    /// Send a body-only notification
    pub async fn send_text(&self, body: &str) -> BarkResult<()> {
        self.send(&Notification::new(body)).await
    }

    /// Send a notification. Dropping the returned future aborts the request.
    pub async fn send(&self, notification: &Notification) -> BarkResult<()> {
        if notification.body().is_empty() {
            return Err(BarkError::EmptyBody);
        }

        let target = self.target_for(notification);
        if path_segments(&self.key, notification)
            .iter()
            .any(|segment| is_dot_segment(segment))
        {
            return Err(BarkError::invalid_target(target, DotSegment));
        }
        let url = Url::parse(&target).map_err(|e| BarkError::invalid_target(&target, e))?;
        let request = self.client.get(url).build()?;

        debug!(
            level = ?notification.effective_level(),
            has_title = notification.title.is_some(),
            "sending bark notification"
        );

        let response = self.client.execute(request).await?;
        let status = response.status();
        // Response is dropped here without reading the body.
        drop(response);

        debug!(status = status.as_u16(), "bark responded");

        if status != StatusCode::OK {
            return Err(BarkError::UnexpectedStatus {
                status_code: status.as_u16(),
            });
        }

        Ok(())
    }

    /// Send a notification, giving up with [`BarkError::Cancelled`] as soon as
    /// `cancel` fires.
    pub async fn send_with_cancel(
        &self,
        cancel: &CancellationToken,
        notification: &Notification,
    ) -> BarkResult<()> {
        if notification.body().is_empty() {
            return Err(BarkError::EmptyBody);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("bark send cancelled");
                Err(BarkError::Cancelled)
            }
            result = self.send(notification) => result,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("path segment '.' or '..' would be collapsed")]
struct DotSegment;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_with_default_base_url() {
        let client = BarkClient::new("", "test-key").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.key(), "test-key");
    }

    #[test]
    fn test_client_creation_with_custom_base_url() {
        let client = BarkClient::new("https://custom.bark.server", "test-key").unwrap();
        assert_eq!(client.base_url(), "https://custom.bark.server");
    }

    #[test]
    fn test_client_requires_key() {
        let err = BarkClient::new("https://api.day.app", "").unwrap_err();
        assert_eq!(err.category(), "config");

        let err = BarkClient::new("", "").unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_client_from_config() {
        let config = BarkConfig {
            server_url: String::new(),
            key: "cfg-key".to_string(),
            timeout_secs: Some(5),
            ..Default::default()
        };
        let client = BarkClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            client.target_for(&Notification::new("hi")),
            "https://api.day.app/cfg-key/hi"
        );
    }

    #[tokio::test]
    async fn test_empty_body_rejected_before_io() {
        // Unroutable server: any attempt at I/O would surface as a transport error.
        let client = BarkClient::new("http://127.0.0.1:9", "test-key").unwrap();

        let err = client.send_text("").await.unwrap_err();
        assert!(matches!(err, BarkError::EmptyBody));

        let cancel = CancellationToken::new();
        let err = client
            .send_with_cancel(&cancel, &Notification::new("").with_title("t"))
            .await
            .unwrap_err();
        assert!(matches!(err, BarkError::EmptyBody));
    }

    #[tokio::test]
    async fn test_malformed_target_is_request_error() {
        let client = BarkClient::new("not a url", "test-key").unwrap();
        let err = client.send_text("hello").await.unwrap_err();
        assert!(matches!(err, BarkError::InvalidTarget { .. }));
    }

    #[tokio::test]
    async fn test_dot_title_is_rejected_before_io() {
        let client = BarkClient::new("http://127.0.0.1:9", "test-key").unwrap();
        let notification = Notification::new("secret").with_title("..");

        assert_eq!(
            client.target_for(&notification),
            "http://127.0.0.1:9/test-key/../secret"
        );
        let err = client.send(&notification).await.unwrap_err();
        assert!(matches!(err, BarkError::InvalidTarget { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_dot_body_is_rejected_before_io() {
        let client = BarkClient::new("http://127.0.0.1:9", "test-key").unwrap();

        let err = client.send_text(".").await.unwrap_err();
        assert!(matches!(err, BarkError::InvalidTarget { .. }), "got {err:?}");

        let err = client
            .send(&Notification::new("body").with_title("t").with_subtitle("."))
            .await
            .unwrap_err();
        assert_eq!(err.category(), "request");
    }

    #[tokio::test]
    async fn test_dot_key_is_rejected() {
        let client = BarkClient::new("http://127.0.0.1:9", "..").unwrap();
        let err = client.send_text("hello").await.unwrap_err();
        assert!(matches!(err, BarkError::InvalidTarget { .. }));
    }

    #[tokio::test]
    async fn test_already_cancelled_token() {
        let client = BarkClient::new("http://127.0.0.1:9", "test-key").unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = client
            .send_with_cancel(&cancel, &Notification::new("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, BarkError::Cancelled));
    }
}
