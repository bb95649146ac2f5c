//! Helpers shared by provider implementations

use reqwest::Client;
use sha1::{Digest, Sha1};

use crate::config::WapiConfig;
use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// HTTP client with the configured timeouts.
pub fn create_http_client(config: &WapiConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.timeout())
        .build()
        .map_err(|e| ProviderError::InvalidParameter {
            param: "http_client".to_string(),
            detail: e.to_string(),
        })
}

// ============ SHA-1 ============

/// Lowercase hex SHA-1 of the UTF-8 bytes of `input`.
pub fn sha1_hex(input: &str) -> String {
    hex::encode(Sha1::digest(input.as_bytes()))
}
