//! Shared helpers for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use pwned_client::{ClientConfig, PwnedClient, SignedRequest, Transport, TransportError};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

pub const PUBLIC_KEY: &str = "pub";
pub const PRIVATE_KEY: &str = "priv";
pub const BASE_URL: &str = "http://api.example.com/";

/// Transport that replays queued replies and records every request it sees.
///
/// A `None` reply simulates a connection that never produced a body. When
/// the queue runs dry the server answers `pong`.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Option<String>>>,
    sent: Mutex<Vec<SignedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, body: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Some(body.into()));
    }

    pub fn fail(&self) {
        self.replies.lock().unwrap().push_back(None);
    }

    pub fn sent(&self) -> Vec<SignedRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> SignedRequest {
        self.sent
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &SignedRequest) -> Result<String, TransportError> {
        self.sent.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Some(body)) => Ok(body),
            Some(None) => Err(TransportError::Connection("connection reset".to_string())),
            None => Ok(ok(json!("pong"))),
        }
    }
}

pub fn client() -> PwnedClient<ScriptedTransport> {
    PwnedClient::with_transport(
        ClientConfig::new(BASE_URL, PUBLIC_KEY, PRIVATE_KEY),
        ScriptedTransport::new(),
    )
}

/// Success envelope around `result`
pub fn ok(result: Value) -> String {
    json!({ "result": result, "error": null }).to_string()
}

/// Error envelope with the given key and reason
pub fn err(key: &str, reason: &str) -> String {
    json!({ "result": null, "error": { "key": key, "reason": reason } }).to_string()
}

/// URL without the trailing `&signature=...`
pub fn unsigned_url(request: &SignedRequest) -> &str {
    request
        .url
        .split("&signature=")
        .next()
        .unwrap_or(&request.url)
}
