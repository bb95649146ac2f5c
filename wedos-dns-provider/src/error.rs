use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::providers::WAPI_CODE_AUTH_FAILED;

/// Where WEDOS documents the meaning of WAPI return codes.
pub const WAPI_RETURN_CODES_URL: &str =
    "https://kb.wedos.com/en/wapi-api-interface/wapi-manual/#return-codes";

/// Unified error type for all WAPI operations.
///
/// Every variant is serializable so a host can forward it as structured data.
///
/// A record that is already gone when cleanup runs is *not* an error: the
/// cleanup path logs a warning and returns `Ok(())`.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ProviderError {
    /// The request never produced a usable HTTP response: connection refused,
    /// DNS resolution failure, timeout, unreadable body or a non-2xx status.
    #[error("[wedos] Transport error: {detail}")]
    Transport {
        /// Error details.
        detail: String,
    },

    /// The response did not have the shape WAPI promises (not JSON, missing
    /// `response` envelope, missing or non-numeric `code`, unexpected rows).
    ///
    /// Indicates a contract mismatch; never retried.
    #[error("[wedos] Malformed response: {detail}")]
    Protocol {
        /// Details about the mismatch.
        detail: String,
    },

    /// WAPI answered with a return code of 2000 or above.
    #[error("[wedos] WAPI error {code}: {detail} (return codes: {url})", url = WAPI_RETURN_CODES_URL)]
    Remote {
        /// WAPI return code.
        code: u32,
        /// `result` text and a truncated copy of the response payload.
        detail: String,
    },

    /// The client was built with an unusable parameter.
    #[error("[wedos] Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to serialize the request envelope.
    #[error("[wedos] Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    pub(crate) fn transport(detail: impl ToString) -> Self {
        Self::Transport {
            detail: detail.to_string(),
        }
    }

    pub(crate) fn protocol(detail: impl ToString) -> Self {
        Self::Protocol {
            detail: detail.to_string(),
        }
    }

    /// WAPI refused the authentication digest.
    ///
    /// The digest is tied to the current hour in Prague, so a request sent
    /// right before the hour rolls over can be rejected once and then succeed.
    #[must_use]
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Remote { code, .. } if *code == WAPI_CODE_AUTH_FAILED)
    }

    /// Whether the failure is the remote side or the caller refusing the
    /// request, as opposed to broken plumbing.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::InvalidParameter { .. })
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
