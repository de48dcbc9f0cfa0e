//! HTTP transport.
//!
//! The [`Transport`] trait is the seam between the client state machine and
//! the network, so the client can be driven by a scripted transport in tests.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::signing::{HttpMethod, SignedRequest};

/// Performs one round-trip and returns the raw response body.
///
/// The status code is not interpreted; error envelopes may arrive with any
/// status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &SignedRequest) -> Result<String, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport using the timeout and user agent from `config`
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &SignedRequest) -> Result<String, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        if request.method != HttpMethod::Get {
            if let Some(body) = &request.body {
                builder = builder
                    .header(CONTENT_TYPE, "application/json")
                    .body(body.clone());
            }
        }

        let response = builder.send().await?;
        log::debug!(
            "{} {} -> {}",
            request.method,
            redact_signature(&request.url),
            response.status()
        );

        Ok(response.text().await?)
    }
}

/// Drop the signature value from a URL before it goes to a log line
pub(crate) fn redact_signature(url: &str) -> &str {
    match url.find("&signature=") {
        Some(idx) => &url[..idx],
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_signature() {
        assert_eq!(
            redact_signature("http://x/ping?publicKey=p&signature=abc"),
            "http://x/ping?publicKey=p"
        );
        assert_eq!(redact_signature("http://x/ping"), "http://x/ping");
    }

    #[test]
    fn test_transport_builds_from_config() {
        let config = ClientConfig::new("http://localhost:1", "pub", "priv");
        assert!(HttpTransport::new(&config).is_ok());
    }
}
