//! # Pwned Client
//!
//! A signed HTTP client for the Pwned competition API: tournaments, leagues,
//! ladders and rankings, plus their signups, rounds and matches.
//!
//! Every request is authenticated with an HMAC-SHA256 signature over a
//! canonical string built from the public key, method, path, query string and
//! body. The server wraps every answer in a `{ "result": ..., "error": ... }`
//! envelope; the client unwraps it into a [`Result`] and keeps a record of
//! every failure.
//!
//! ## Core Modules
//!
//! - [`signing`]: canonical strings, signatures and signed URLs
//! - [`response`]: envelope classification and [`ApiError`]
//! - [`client`]: [`PwnedClient`], its error history and debug log
//! - [`models`]: typed request and response payloads
//! - [`transport`]: the [`Transport`] seam and the reqwest implementation
//!
//! ## Example
//!
//! ```no_run
//! use pwned_client::{ClientConfig, PwnedClient};
//! use pwned_client::models::CreateTournament;
//!
//! # async fn run() -> pwned_client::Result<()> {
//! let config = ClientConfig::new("https://api.example.com", "public", "private");
//! let mut client = PwnedClient::new(config)?;
//!
//! let tournament = client
//!     .create_tournament(&CreateTournament::new("Summer Cup"))
//!     .await?;
//! println!("created {}", tournament.id);
//! # Ok(())
//! # }
//! ```

/// Endpoint bindings grouped by resource.
pub mod api;
pub use api::{DEFAULT_LADDER_HITS, DEFAULT_LADDER_OFFSET};

/// The client state machine.
pub mod client;
pub use client::PwnedClient;

/// Client configuration and environment loading.
pub mod config;
pub use config::{ClientConfig, ConfigError};

/// Request/response debug log and JSON report.
pub mod debug;
pub use debug::{DebugContext, DebugLog, DebugRecord, DebugValue};

/// Client and transport error types.
pub mod error;
pub use error::{ClientError, Result, TransportError};

/// Typed request and response payloads.
pub mod models;

/// Observers notified about failing calls.
pub mod observer;
pub use observer::{ErrorObserver, ObserverId};

/// Response envelope classification.
pub mod response;
pub use response::{ApiError, Outcome};

/// Canonical strings, HMAC signatures and signed URLs.
pub mod signing;
pub use signing::{Credentials, HttpMethod, RequestDescriptor, SignedRequest, SigningRevision};

/// HTTP transport seam and its reqwest implementation.
pub mod transport;
pub use transport::{HttpTransport, Transport};
