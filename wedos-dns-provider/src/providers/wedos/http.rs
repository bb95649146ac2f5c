//! WAPI command transport

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::truncate_for_log;

use super::WedosClient;
use super::types::{WapiCommand, WapiRequest, WapiRequestEnvelope, WapiResponse};

impl WedosClient {
    /// Run one WAPI command and return the decoded response.
    ///
    /// The digest only holds for the current Prague hour, so an
    /// authentication rejection is retried exactly once with a fresh digest.
    /// Nothing else is retried.
    pub async fn command<D>(&self, command: WapiCommand, data: Option<&D>) -> Result<WapiResponse>
    where
        D: Serialize + Sync,
    {
        let result = match self.send_command(command, data).await {
            Err(e) if e.is_auth_rejection() => {
                log::warn!("[wedos] {command}: auth rejected, retrying once with a fresh digest");
                self.send_command(command, data).await
            }
            other => other,
        };

        if let Err(e) = &result {
            if e.is_expected() {
                log::warn!("[wedos] {command} failed: {e}");
            } else {
                log::error!("[wedos] {command} failed: {e}");
            }
        }
        result
    }

    async fn send_command<D>(&self, command: WapiCommand, data: Option<&D>) -> Result<WapiResponse>
    where
        D: Serialize + Sync,
    {
        // 1. Sign
        let auth = self.sign(Utc::now());

        // 2. Serialize the envelope
        let envelope = WapiRequestEnvelope {
            request: WapiRequest {
                user: &self.user,
                auth: &auth,
                command,
                data,
            },
        };
        let payload = serde_json::to_string(&envelope).map_err(|e| ProviderError::Serialization {
            detail: e.to_string(),
        })?;

        if log::log_enabled!(log::Level::Debug) {
            let data = data
                .and_then(|d| serde_json::to_string(d).ok())
                .unwrap_or_else(|| "null".to_string());
            log::debug!("[wedos] {command} data={}", truncate_for_log(&data));
        }

        // 3. Send
        let request = self
            .client
            .post(&self.config.endpoint)
            .form(&[("request", payload)]);
        let response_text = HttpUtils::execute_request(request, command.as_str()).await?;

        // 4. Decode
        let body: Value = HttpUtils::parse_json(&response_text)?;
        WapiResponse::from_body(body)?.into_result(command)
    }
}
