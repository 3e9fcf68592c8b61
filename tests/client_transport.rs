//! Transport tests for BarkClient against a local stub server

mod common;

use bark_notify::{BarkClient, BarkError, CancellationToken, Notification};
use common::StubServer;
use std::time::Duration;

#[tokio::test]
async fn test_ok_status_is_success() {
    let server = StubServer::respond_with(200).await;
    let client = BarkClient::new(server.url(), "test-key").unwrap();

    client.send_text("test message").await.unwrap();

    assert_eq!(
        server.requests(),
        vec!["GET /test-key/test%20message".to_string()]
    );
}

#[tokio::test]
async fn test_not_found_carries_status_code() {
    let server = StubServer::respond_with(404).await;
    let client = BarkClient::new(server.url(), "test-key").unwrap();

    let err = client.send_text("hello").await.unwrap_err();

    assert!(matches!(err, BarkError::UnexpectedStatus { status_code: 404 }));
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.category(), "remote");
}

#[tokio::test]
async fn test_other_success_codes_are_rejected() {
    let server = StubServer::respond_with(204).await;
    let client = BarkClient::new(server.url(), "test-key").unwrap();

    let err = client.send_text("hello").await.unwrap_err();
    assert_eq!(err.status_code(), Some(204));
}

#[tokio::test]
async fn test_full_notification_request_line() {
    let server = StubServer::respond_with(200).await;
    let client = BarkClient::new(server.url(), "test-key").unwrap();

    let notification = Notification::new("Important meeting in 5 minutes!")
        .with_title("Meeting Reminder")
        .with_subtitle("Team Standup")
        .with_sound("bell")
        .time_sensitive()
        .critical();
    client.send(&notification).await.unwrap();

    assert_eq!(
        server.requests(),
        vec![
            "GET /test-key/Meeting%20Reminder/Team%20Standup/Important%20meeting%20in%205%20minutes%21?level=critical&sound=bell"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn test_dot_segments_never_reach_server() {
    let server = StubServer::respond_with(200).await;
    let client = BarkClient::new(server.url(), "test-key").unwrap();

    let err = client
        .send(&Notification::new("secret").with_title(".."))
        .await
        .unwrap_err();
    assert!(matches!(err, BarkError::InvalidTarget { .. }));

    let err = client.send_text(".").await.unwrap_err();
    assert!(matches!(err, BarkError::InvalidTarget { .. }));

    client.send_text("...").await.unwrap();
    assert_eq!(server.requests(), vec!["GET /test-key/...".to_string()]);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = BarkClient::new(format!("http://127.0.0.1:{port}"), "test-key").unwrap();

    let err = client.send_text("hello").await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_cancel_aborts_in_flight_request() {
    let server = StubServer::hang().await;
    let client = BarkClient::new(server.url(), "test-key").unwrap();
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        client.send_with_cancel(&cancel, &Notification::new("hello")),
    )
    .await
    .expect("cancellation should end the send");

    assert!(matches!(result, Err(BarkError::Cancelled)));
}

#[tokio::test]
async fn test_client_timeout_from_config() {
    let server = StubServer::hang().await;
    let config = bark_notify::BarkConfig {
        server_url: server.url(),
        key: "test-key".to_string(),
        timeout_secs: Some(1),
        ..Default::default()
    };
    let client = BarkClient::from_config(&config).unwrap();

    let err = client.send_text("hello").await.unwrap_err();
    assert!(matches!(err, BarkError::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_client_is_shared_across_tasks() {
    let server = StubServer::respond_with(200).await;
    let client = BarkClient::new(server.url(), "test-key").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.send_text(&format!("message {i}")).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(server.requests().len(), 4);
}
