//! WEDOS WAPI client
//!
//! WAPI is a single JSON-RPC-style endpoint: every call is a form POST whose
//! `request` field carries `{"request": {"user", "auth", "command", "data"}}`.
//! Zone edits are staged until `dns-domain-commit` publishes them.

mod error;
mod http;
mod provider;
mod records;
mod sign;
mod types;

use std::fmt;

use chrono_tz::Tz;
use reqwest::Client;

use crate::config::WapiConfig;
use crate::error::{ProviderError, Result};
use crate::providers::common::{create_http_client, sha1_hex};

pub use sign::auth_digest;
pub use types::{RowId, WapiCommand, WapiResponse, WapiRow};

/// Return codes at or above this value are errors.
pub(crate) const WAPI_ERROR_THRESHOLD: u32 = 2000;
/// WAPI return code for a rejected login / auth digest.
pub(crate) const WAPI_CODE_AUTH_FAILED: u32 = 2050;

/// WEDOS WAPI client.
///
/// Holds no mutable state; one instance can serve any number of sequential
/// `perform` / `cleanup` calls.
pub struct WedosClient {
    pub(crate) client: Client,
    pub(crate) config: WapiConfig,
    pub(crate) user: String,
    /// SHA-1 hex of the WAPI password, computed once at construction.
    pub(crate) secret_sha1: String,
}

/// `WedosClient` builder
pub struct WedosClientBuilder {
    user: String,
    secret: String,
    config: WapiConfig,
}

impl WedosClientBuilder {
    fn new(user: String, secret: String) -> Self {
        Self {
            user,
            secret,
            config: WapiConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: WapiConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.config.ttl = ttl;
        self
    }

    #[must_use]
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn connect_timeout_secs(mut self, secs: u64) -> Self {
        self.config.connect_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn timezone(mut self, timezone: Tz) -> Self {
        self.config.timezone = timezone;
        self
    }

    /// Validates the inputs and builds the client. No network traffic.
    pub fn build(self) -> Result<WedosClient> {
        if self.user.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                param: "user".to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        if self.secret.is_empty() {
            return Err(ProviderError::InvalidParameter {
                param: "secret".to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        if self.config.endpoint.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                param: "endpoint".to_string(),
                detail: "must not be empty".to_string(),
            });
        }

        Ok(WedosClient {
            client: create_http_client(&self.config)?,
            secret_sha1: sha1_hex(&self.secret),
            user: self.user,
            config: self.config,
        })
    }
}

impl WedosClient {
    /// Client with the default configuration.
    pub fn new(user: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::builder(user, secret).build()
    }

    pub fn builder(user: impl Into<String>, secret: impl Into<String>) -> WedosClientBuilder {
        WedosClientBuilder::new(user.into(), secret.into())
    }

    pub fn config(&self) -> &WapiConfig {
        &self.config
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

impl fmt::Debug for WedosClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WedosClient")
            .field("user", &self.user)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
