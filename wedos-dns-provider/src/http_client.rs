//! HTTP plumbing shared by every WAPI command
//!
//! Sends an already-built `RequestBuilder`, logs, and folds every
//! network-layer failure into [`ProviderError::Transport`]. Interpreting the
//! body is left to the caller.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text.
    ///
    /// Connection failures, timeouts, non-2xx statuses and unreadable bodies
    /// all come back as `Transport`. No retries happen here.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        command: &str,
    ) -> Result<String, ProviderError> {
        log::debug!("[wedos] POST command={command}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::transport(format!("request timed out: {e}"))
            } else {
                ProviderError::transport(e)
            }
        })?;

        let status = response.status();
        log::debug!("[wedos] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[wedos] HTTP {} for command={command}", status.as_u16());
            return Err(ProviderError::transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate_for_log(&body)
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::transport(format!("Failed to read response body: {e}")))?;

        log::debug!(
            "[wedos] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse a JSON body; anything that is not JSON is a `Protocol` error.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[wedos] JSON parse failed: {e}");
            log::error!("[wedos] Raw response: {}", truncate_for_log(response_text));
            ProviderError::protocol(format!("response is not valid JSON: {e}"))
        })
    }
}
