//! WAPI return code handling
//!
//! Reference: <https://kb.wedos.com/en/wapi-api-interface/wapi-manual/#return-codes>

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

use super::types::{WapiCommand, WapiResponse};
use super::WAPI_ERROR_THRESHOLD;

impl WapiResponse {
    pub fn is_success(&self) -> bool {
        self.code < WAPI_ERROR_THRESHOLD
    }

    /// Turn a response into `Ok` or a `Remote` error.
    pub(crate) fn into_result(self, command: WapiCommand) -> Result<Self, ProviderError> {
        if self.is_success() {
            return Ok(self);
        }

        let error = ProviderError::Remote {
            code: self.code,
            detail: format!(
                "{}; response: {}",
                self.result.as_deref().unwrap_or("no result text"),
                truncate_for_log(&self.payload.to_string())
            ),
        };

        log::debug!("[wedos] {command} returned code {}", self.code);
        Err(error)
    }
}
