//! WAPI client configuration
//!
//! All values have working defaults; a host only overrides what it needs,
//! either through [`WapiConfig`] directly (it deserializes with
//! `#[serde(default)]`, so partial documents are fine) or through the client
//! builder.

use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// WAPI JSON endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.wedos.com/wapi/json";
/// TTL for challenge records (seconds).
pub const DEFAULT_TTL: u32 = 300;
/// Whole-request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// Connect timeout (seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
/// WAPI checks the auth digest against its own wall clock, which runs on Prague time.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Prague;

/// Tunables for [`WedosClient`](crate::WedosClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WapiConfig {
    /// WAPI endpoint URL.
    pub endpoint: String,
    /// TTL of created TXT records, in seconds.
    pub ttl: u32,
    /// Whole-request timeout, in seconds.
    pub timeout_secs: u64,
    /// Connect timeout, in seconds.
    pub connect_timeout_secs: u64,
    /// Timezone whose wall-clock hour salts the auth digest.
    pub timezone: Tz,
}

impl Default for WapiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            ttl: DEFAULT_TTL,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl WapiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
