//! Client configuration

use crate::{ClientError, ClientResult, IikoApi, IikoClient};
use sha1::{Digest, Sha1};
use std::fmt;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Hash a plain password the way the resto server expects it (SHA-1, lowercase hex)
pub fn hash_password(plain: &str) -> String {
    hex::encode(Sha1::digest(plain.as_bytes()))
}

/// Client configuration for connecting to a resto server
#[derive(Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://demo.iiko.it:443")
    pub base_url: String,

    /// API user login
    pub login: String,

    /// SHA-1 hex hash of the API user's password
    pub(crate) password_hash: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// `User-Agent` header; reqwest sends none by default
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration from an already hashed password
    pub fn new(
        base_url: impl Into<String>,
        login: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            login: login.into(),
            password_hash: password_hash.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    /// Set the password from its plain form
    pub fn with_password(mut self, plain: &str) -> Self {
        self.password_hash = hash_password(plain);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the `User-Agent` header sent with every request
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Load configuration from environment variables
    ///
    /// * `IIKO_BASE_URL`, `IIKO_LOGIN` (required)
    /// * `IIKO_PASSWORD_HASH`, or `IIKO_PASSWORD` to be hashed
    /// * `IIKO_TIMEOUT` in seconds (optional)
    /// * `IIKO_USER_AGENT` (optional)
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let require = |name: &str| {
            var(name).ok_or_else(|| ClientError::Config(format!("{name} must be set")))
        };

        let base_url = require("IIKO_BASE_URL")?;
        let login = require("IIKO_LOGIN")?;
        let password_hash = match (var("IIKO_PASSWORD_HASH"), var("IIKO_PASSWORD")) {
            (Some(hash), _) => hash,
            (None, Some(plain)) => hash_password(&plain),
            (None, None) => {
                return Err(ClientError::Config(
                    "IIKO_PASSWORD_HASH or IIKO_PASSWORD must be set".into(),
                ));
            }
        };
        let timeout = var("IIKO_TIMEOUT")
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let mut config = Self::new(base_url, login, password_hash).with_timeout(timeout);
        config.user_agent = var("IIKO_USER_AGENT");
        Ok(config)
    }

    /// Check that the configuration can be used to build a client
    pub fn validate(&self) -> ClientResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }
        if self.login.is_empty() {
            return Err(ClientError::Config("login must not be empty".into()));
        }
        Ok(())
    }

    /// Create a session client from this configuration
    pub fn build_client(&self) -> ClientResult<IikoClient> {
        IikoClient::new(self)
    }

    /// Create the endpoint facade from this configuration
    pub fn build_api(&self) -> ClientResult<IikoApi> {
        IikoApi::new(self)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("login", &self.login)
            .field("password_hash", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
