//! The API client: credentials, error state, debug log and the signed
//! request/response cycle every endpoint goes through.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

use crate::config::{ClientConfig, normalize_base_url};
use crate::debug::{DebugContext, DebugLog, DebugRecord, DebugValue};
use crate::error::{ClientError, Result};
use crate::observer::{ErrorObserver, ObserverId, Observers};
use crate::response::{self, ApiError, Outcome};
use crate::signing::{Credentials, RequestDescriptor, SigningRevision};
use crate::transport::{HttpTransport, Transport, redact_signature};

/// Client for the Pwned competition API.
///
/// Each call performs exactly one signed round-trip. The outcome is returned
/// as a [`Result`] and also recorded on the client: a failing call sets
/// [`last_error`](Self::last_error) and appends to [`errors`](Self::errors);
/// a successful one clears the last error. The history is never trimmed.
///
/// All calls take `&mut self`; share a client across tasks only behind a
/// lock.
pub struct PwnedClient<T: Transport = HttpTransport> {
    url: String,
    credentials: Credentials,
    signing_revision: SigningRevision,
    transport: T,
    last_error: Option<ApiError>,
    errors: Vec<ApiError>,
    debug_enabled: bool,
    debug_log: DebugLog,
    observers: Observers,
}

impl PwnedClient<HttpTransport> {
    /// Create a client using the reqwest transport
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be built
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config).map_err(ClientError::Build)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client from `PWNED_API_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> PwnedClient<T> {
    /// Create a client on top of an arbitrary transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            url: normalize_base_url(&config.base_url),
            credentials: Credentials::new(config.public_key, config.private_key),
            signing_revision: config.signing_revision,
            transport,
            last_error: None,
            errors: Vec::new(),
            debug_enabled: config.debug,
            debug_log: DebugLog::new(),
            observers: Observers::default(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the base URL; a trailing `/` is appended if missing
    pub fn set_url(&mut self, url: &str) {
        self.url = normalize_base_url(url);
    }

    pub fn public_key(&self) -> &str {
        &self.credentials.public_key
    }

    pub fn set_public_key(&mut self, public_key: impl Into<String>) {
        self.credentials.public_key = public_key.into();
    }

    pub fn private_key(&self) -> &str {
        &self.credentials.private_key
    }

    pub fn set_private_key(&mut self, private_key: impl Into<String>) {
        self.credentials.private_key = private_key.into();
    }

    pub fn signing_revision(&self) -> SigningRevision {
        self.signing_revision
    }

    pub fn set_signing_revision(&mut self, revision: SigningRevision) {
        self.signing_revision = revision;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Error produced by the most recent call, `None` after a success
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    /// Reason text of the last error
    pub fn last_error_reason(&self) -> Option<&str> {
        self.last_error.as_ref().map(|e| e.reason.as_str())
    }

    /// Every error seen by this client, oldest first
    pub fn errors(&self) -> &[ApiError] {
        &self.errors
    }

    fn add_error(&mut self, error: ApiError) {
        self.last_error = Some(error.clone());
        self.errors.push(error);
    }

    pub fn is_debugging_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn enable_debugging(&mut self) {
        self.debug_enabled = true;
    }

    pub fn disable_debugging(&mut self) {
        self.debug_enabled = false;
    }

    /// Requests and raw responses recorded while debugging was enabled
    pub fn debug_values(&self) -> &[DebugRecord] {
        self.debug_log.records()
    }

    /// The debug log as a JSON string
    pub fn debug_values_for_report(&self) -> Result<String> {
        Ok(self.debug_log.to_report()?)
    }

    /// Write the debug log as JSON to `path`, returning the bytes written
    pub fn write_debug_values_for_report(&self, path: impl AsRef<Path>) -> Result<usize> {
        self.debug_log.write_report(path)
    }

    /// Register an observer called after every failing call while debugging
    /// is enabled
    pub fn subscribe(&mut self, observer: impl ErrorObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Sign and send one request, returning the envelope's `result`.
    ///
    /// A `null` result is returned as [`Value::Null`]; failures are
    /// returned as errors and recorded on the client.
    pub async fn request(&mut self, descriptor: RequestDescriptor) -> Result<Value> {
        self.round_trip(descriptor, Ok).await
    }

    /// Send a request and decode its result into `R`.
    ///
    /// A result that does not match `R` is recorded as
    /// `invalid_json_structure_returned`.
    pub(crate) async fn call<R: DeserializeOwned>(
        &mut self,
        descriptor: RequestDescriptor,
    ) -> Result<R> {
        self.round_trip(descriptor, serde_json::from_value).await
    }

    /// One signed round-trip; `decode` runs before the response is logged
    /// and observers are notified.
    async fn round_trip<R, F>(&mut self, descriptor: RequestDescriptor, decode: F) -> Result<R>
    where
        F: FnOnce(Value) -> serde_json::Result<R>,
    {
        let signed = descriptor.sign(&self.url, &self.credentials, self.signing_revision);

        if self.debug_enabled {
            self.debug_log.push(
                DebugContext::Request,
                DebugValue {
                    request_method: signed.method,
                    url: signed.url.clone(),
                    data: signed.body.clone(),
                },
                &self.errors,
            );
        }

        let (raw, outcome) = match self.transport.send(&signed).await {
            Ok(body) => {
                let outcome = response::classify(&body);
                (Some(body), Ok(outcome))
            }
            Err(source) => (None, Err(source)),
        };

        let result = match outcome {
            Ok(Outcome::Success(value)) => match decode(value) {
                Ok(decoded) => {
                    self.last_error = None;
                    Ok(decoded)
                }
                Err(e) => {
                    log::warn!("Unexpected result structure from {}: {e}", descriptor.path);
                    let error = ApiError::invalid_json_with_reason(format!(
                        "The result returned from the server didn't match the expected structure: {e}"
                    ));
                    self.add_error(error.clone());
                    Err(ClientError::InvalidResponse(error))
                }
            },
            Ok(Outcome::Failure(error)) => {
                log::warn!(
                    "{} {} failed: {}",
                    signed.method,
                    descriptor.path,
                    error
                );
                self.add_error(error.clone());
                Err(ClientError::Api(error))
            }
            Ok(Outcome::Malformed(error)) => {
                log::warn!(
                    "{} {} returned an unusable body",
                    signed.method,
                    descriptor.path
                );
                self.add_error(error.clone());
                Err(ClientError::InvalidResponse(error))
            }
            Err(source) => {
                log::warn!(
                    "{} {} failed: {}",
                    signed.method,
                    redact_signature(&signed.url),
                    source
                );
                let error = ApiError::invalid_json_with_reason(format!(
                    "No content was returned from the server: {source}"
                ));
                self.add_error(error.clone());
                Err(ClientError::Transport { error, source })
            }
        };

        if self.debug_enabled {
            self.debug_log.push(
                DebugContext::Response,
                DebugValue {
                    request_method: signed.method,
                    url: signed.url,
                    data: raw,
                },
                &self.errors,
            );

            if self.last_error.is_some() {
                if let Some((request, response)) = self.debug_log.last_pair() {
                    self.observers.notify(request, response);
                }
            }
        }

        result
    }
}

/// Serialize `body` once for both signing and transmission.
///
/// Falsy bodies (an empty list, an object with no fields set) are not sent.
pub(crate) fn json_body<B: Serialize + ?Sized>(
    descriptor: RequestDescriptor,
    body: &B,
) -> Result<RequestDescriptor> {
    let value = serde_json::to_value(body)?;
    if !response::is_truthy(&value) {
        return Ok(descriptor);
    }
    Ok(descriptor.with_body(serde_json::to_string(body)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::response::keys;
    use crate::signing::SignedRequest;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Replies with a fixed body and remembers what was sent
    struct FixedTransport {
        body: Option<String>,
        sent: Mutex<Vec<SignedRequest>>,
    }

    impl FixedTransport {
        fn replying(body: &str) -> Self {
            Self {
                body: Some(body.to_string()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                body: None,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for FixedTransport {
        async fn send(&self, request: &SignedRequest) -> std::result::Result<String, TransportError> {
            self.sent.lock().unwrap().push(request.clone());
            self.body
                .clone()
                .ok_or_else(|| TransportError::Connection("refused".to_string()))
        }
    }

    fn client(transport: FixedTransport) -> PwnedClient<FixedTransport> {
        PwnedClient::with_transport(
            ClientConfig::new("http://api.example.com", "pub", "priv"),
            transport,
        )
    }

    #[test]
    fn test_url_normalized_on_construction_and_set() {
        let mut c = client(FixedTransport::replying("{}"));
        assert_eq!(c.url(), "http://api.example.com/");

        c.set_url("http://other.example.com/");
        assert_eq!(c.url(), "http://other.example.com/");
        c.set_url("http://other.example.com");
        assert_eq!(c.url(), "http://other.example.com/");
    }

    #[tokio::test]
    async fn test_request_uses_signed_url() {
        let mut c = client(FixedTransport::replying(r#"{"result":"pong","error":null}"#));
        let result = c.request(RequestDescriptor::get("ping")).await.unwrap();
        assert_eq!(result, json!("pong"));

        let sent = c.transport().sent.lock().unwrap();
        assert_eq!(
            sent[0].url,
            "http://api.example.com/ping?publicKey=pub&signature=727d9175b66546b1b0fb18297e8a4d3bbe911a65e4a8225e1575b6a82317837f"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_recorded() {
        let mut c = client(FixedTransport::unreachable());
        c.enable_debugging();

        let err = c.request(RequestDescriptor::get("ping")).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport { .. }));
        assert_eq!(c.last_error().unwrap().key, keys::INVALID_JSON_STRUCTURE_RETURNED);
        assert_eq!(c.errors().len(), 1);

        let response = &c.debug_values()[1];
        assert_eq!(response.context, DebugContext::Response);
        assert_eq!(response.value.data, None);
    }

    #[tokio::test]
    async fn test_undecodable_result_is_recorded() {
        let mut c = client(FixedTransport::replying(r#"{"result":"pong","error":null}"#));
        let err = c
            .call::<Vec<u32>>(RequestDescriptor::get("games"))
            .await
            .unwrap_err();

        assert!(err.is_invalid_response());
        assert_eq!(c.last_error().unwrap().key, keys::INVALID_JSON_STRUCTURE_RETURNED);
        assert_eq!(c.errors().len(), 1);
    }

    #[test]
    fn test_json_body_skips_falsy_payloads() {
        let empty: Vec<u32> = Vec::new();
        let descriptor = json_body(RequestDescriptor::post("x"), &empty).unwrap();
        assert_eq!(descriptor.body, None);

        let descriptor = json_body(RequestDescriptor::post("x"), &json!({"status": "live"})).unwrap();
        assert_eq!(descriptor.body.as_deref(), Some(r#"{"status":"live"}"#));
    }

    #[test]
    fn test_key_setters() {
        let mut c = client(FixedTransport::replying("{}"));
        c.set_public_key("new-pub");
        c.set_private_key("new-priv");
        assert_eq!(c.public_key(), "new-pub");
        assert_eq!(c.private_key(), "new-priv");
    }
}
