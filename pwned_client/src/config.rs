//! Client configuration.
//!
//! Credentials and the endpoint are passed explicitly; [`ClientConfig::from_env`]
//! is an opt-in helper that reads the same variables the integration suite
//! uses.

use std::fmt;
use std::time::Duration;

use crate::signing::SigningRevision;

/// Environment variable holding the API base URL
pub const ENV_API_URL: &str = "PWNED_API_URL";
/// Environment variable holding the public key
pub const ENV_PUBLIC_KEY: &str = "PWNED_API_PUBLIC_KEY";
/// Environment variable holding the private key
pub const ENV_PRIVATE_KEY: &str = "PWNED_API_PRIVATE_KEY";
/// Enables the debug log when set to a truthy value
pub const ENV_DEBUG: &str = "PWNED_CLIENT_DEBUG";
/// Request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "PWNED_API_TIMEOUT_SECS";
/// `legacy` or `query` (default)
pub const ENV_SIGNING: &str = "PWNED_API_SIGNING";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("pwned_client/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`crate::PwnedClient`]
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API endpoint; normalized to end with `/`
    pub base_url: String,
    pub public_key: String,
    pub private_key: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
    pub signing_revision: SigningRevision,
    /// Start with the debug log enabled
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            public_key: public_key.into(),
            private_key: private_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            signing_revision: SigningRevision::default(),
            debug: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_signing_revision(mut self, revision: SigningRevision) -> Self {
        self.signing_revision = revision;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Load configuration from the process environment, after reading a
    /// `.env` file if one exists.
    ///
    /// # Errors
    ///
    /// Returns error if a required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Required: [`ENV_API_URL`], [`ENV_PUBLIC_KEY`], [`ENV_PRIVATE_KEY`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str, hint: &str| {
            lookup(var)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingRequired {
                    var: var.to_string(),
                    hint: hint.to_string(),
                })
        };

        let base_url = required(ENV_API_URL, "e.g. https://api.pwned.no/")?;
        let public_key = required(ENV_PUBLIC_KEY, "Issued together with the private key")?;
        let private_key = required(ENV_PRIVATE_KEY, "Issued together with the public key")?;

        let signing_revision = match lookup(ENV_SIGNING).as_deref().map(str::to_lowercase) {
            None => SigningRevision::default(),
            Some(v) if v == "query" || v.is_empty() => SigningRevision::QueryAware,
            Some(v) if v == "legacy" => SigningRevision::Legacy,
            Some(v) => {
                return Err(ConfigError::Invalid {
                    var: ENV_SIGNING.to_string(),
                    reason: format!("Expected 'legacy' or 'query', got '{v}'"),
                });
            }
        };

        let debug = lookup(ENV_DEBUG)
            .map(|v| !matches!(v.to_lowercase().as_str(), "" | "0" | "false" | "no" | "off"))
            .unwrap_or(false);

        let timeout_secs = parse_or(&lookup, ENV_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS);

        let config = ClientConfig::new(base_url, public_key, private_key)
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_signing_revision(signing_revision)
            .with_debug(debug);
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: ENV_API_URL.to_string(),
                reason: format!("Must start with http:// or https://, got '{}'", self.base_url),
            });
        }

        if self.public_key.is_empty() {
            return Err(ConfigError::Invalid {
                var: ENV_PUBLIC_KEY.to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.private_key.is_empty() {
            return Err(ConfigError::Invalid {
                var: ENV_PRIVATE_KEY.to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::Invalid {
                var: ENV_TIMEOUT_SECS.to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("public_key", &self.public_key)
            .field("private_key", &"***")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("signing_revision", &self.signing_revision)
            .field("debug", &self.debug)
            .finish()
    }
}

/// Append `/` unless the URL already ends with one
pub fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
