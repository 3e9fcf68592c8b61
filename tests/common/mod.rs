//! Common test utilities
//!
//! An axum stub standing in for the Bark server. It answers every request with
//! a fixed status, or never answers, and records `METHOD /path?query` for each
//! request it sees.

#![allow(dead_code)]

use axum::extract::{OriginalUri, State};
use axum::http::{Method, StatusCode};
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
struct StubState {
    status: Option<StatusCode>,
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Answer every request with `status`
    pub async fn respond_with(status: u16) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        Self::start(Some(status)).await
    }

    /// Record requests but never answer them
    pub async fn hang() -> Self {
        Self::start(None).await
    }

    async fn start(status: Option<StatusCode>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new().fallback(record).with_state(StubState {
            status,
            requests: Arc::clone(&requests),
        });
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far, e.g. `GET /key/body`
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Wait until at least one request has arrived
    pub async fn wait_for_request(&self) -> Option<String> {
        for _ in 0..200 {
            if let Some(first) = self.requests().into_iter().next() {
                return Some(first);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> StatusCode {
    state.requests.lock().unwrap().push(format!("{method} {uri}"));

    match state.status {
        Some(status) => status,
        None => std::future::pending().await,
    }
}
