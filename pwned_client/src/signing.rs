//! Request canonicalization and HMAC-SHA256 signing.
//!
//! Every call to the API carries `publicKey` and `signature` query
//! parameters. The signature is a lowercase hex HMAC-SHA256 digest, keyed
//! with the private key, over a pipe-delimited canonical string:
//!
//! ```text
//! publicKey|METHOD|path|queryString|body
//! ```
//!
//! The server rebuilds the same string from the request it receives, so the
//! body must be signed exactly as it is transmitted.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Field separator in the canonical signing string
pub const SIGNING_DELIMITER: &str = "|";

/// HTTP methods accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Uppercase wire name, as it appears in the canonical string
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which fields the server folds into the signed message.
///
/// Older deployments sign `publicKey|METHOD|path|body`; the current
/// contract adds the extra query string as its own field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SigningRevision {
    /// `publicKey|METHOD|path|body`
    Legacy,
    /// `publicKey|METHOD|path|queryString|body`
    #[default]
    QueryAware,
}

/// Public/private key pair used to sign requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub public_key: String,
    pub private_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"***")
            .finish()
    }
}

/// Build the canonical string that gets fed into the HMAC.
///
/// `query` is the already-serialized extra query string (without the
/// `publicKey`/`signature` pair) and `body` the exact JSON that will be
/// sent; both are empty strings when absent.
pub fn canonical_string(
    public_key: &str,
    method: HttpMethod,
    path: &str,
    query: &str,
    body: &str,
    revision: SigningRevision,
) -> String {
    let method = method.as_str();
    match revision {
        SigningRevision::Legacy => [public_key, method, path, body].join(SIGNING_DELIMITER),
        SigningRevision::QueryAware => {
            [public_key, method, path, query, body].join(SIGNING_DELIMITER)
        }
    }
}

/// Lowercase hex HMAC-SHA256 of `message` keyed with `private_key`
pub fn compute_signature(private_key: &str, message: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(private_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Serialize ordered query pairs as `k=v&k=v`, percent-encoding keys and values
pub fn build_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// One outgoing API call before it is signed.
///
/// Built fresh for every call; the signature is derived from it by
/// [`RequestDescriptor::sign`] and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Resource path relative to the base URL, without leading slash or query
    pub path: String,
    pub method: HttpMethod,
    /// Serialized JSON body, signed and transmitted verbatim
    pub body: Option<String>,
    /// Extra query parameters in the order they should appear
    pub query: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach an already-serialized body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append one query parameter after the ones already present
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Serialized extra query string, empty if there are no parameters
    pub fn query_string(&self) -> String {
        build_query_string(&self.query)
    }

    /// Canonical signing string for this request
    pub fn canonical_string(&self, public_key: &str, revision: SigningRevision) -> String {
        canonical_string(
            public_key,
            self.method,
            &self.path,
            &self.query_string(),
            self.body.as_deref().unwrap_or(""),
            revision,
        )
    }

    /// Sign the request and assemble the full URL.
    ///
    /// `base_url` is expected to already end with `/`; the path is appended
    /// as-is.
    pub fn sign(
        &self,
        base_url: &str,
        credentials: &Credentials,
        revision: SigningRevision,
    ) -> SignedRequest {
        let query = self.query_string();
        let message = canonical_string(
            &credentials.public_key,
            self.method,
            &self.path,
            &query,
            self.body.as_deref().unwrap_or(""),
            revision,
        );
        let signature = compute_signature(&credentials.private_key, &message);

        let mut url = String::with_capacity(base_url.len() + self.path.len() + query.len() + 96);
        url.push_str(base_url);
        url.push_str(&self.path);
        url.push('?');
        if !query.is_empty() {
            url.push_str(&query);
            url.push('&');
        }
        url.push_str("publicKey=");
        url.push_str(&credentials.public_key);
        url.push_str("&signature=");
        url.push_str(&signature);

        SignedRequest {
            method: self.method,
            url,
            body: self.body.clone(),
            signature,
        }
    }
}

/// A request ready to be put on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: HttpMethod,
    /// Full URL including extra query, `publicKey` and `signature`
    pub url: String,
    pub body: Option<String>,
    pub signature: String,
}
