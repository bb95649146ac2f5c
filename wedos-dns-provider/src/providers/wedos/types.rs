//! WEDOS WAPI type definition

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};

// ============ Commands ============

/// WAPI commands used by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WapiCommand {
    /// Connectivity and credential check.
    #[serde(rename = "ping")]
    Ping,
    #[serde(rename = "dns-rows-list")]
    RowsList,
    #[serde(rename = "dns-row-add")]
    RowAdd,
    #[serde(rename = "dns-row-delete")]
    RowDelete,
    /// Publish staged zone edits.
    #[serde(rename = "dns-domain-commit")]
    DomainCommit,
}

impl WapiCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::RowsList => "dns-rows-list",
            Self::RowAdd => "dns-row-add",
            Self::RowDelete => "dns-row-delete",
            Self::DomainCommit => "dns-domain-commit",
        }
    }
}

impl fmt::Display for WapiCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Request envelope ============

/// `{"request": {...}}`, JSON-encoded into the `request` form field.
#[derive(Debug, Serialize)]
pub(crate) struct WapiRequestEnvelope<'a, D: Serialize> {
    pub request: WapiRequest<'a, D>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WapiRequest<'a, D: Serialize> {
    pub user: &'a str,
    pub auth: &'a str,
    pub command: WapiCommand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a D>,
}

/// Parameters that only name the zone (`dns-rows-list`).
#[derive(Debug, Serialize)]
pub(crate) struct DomainParams<'a> {
    pub domain: &'a str,
}

/// `dns-domain-commit` parameters.
///
/// WAPI documents the zone under `name`; `domain` is sent alongside so the
/// payload reads the same as every other zone-scoped command.
#[derive(Debug, Serialize)]
pub(crate) struct CommitParams<'a> {
    pub domain: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RowAddParams<'a> {
    pub domain: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub ttl: u32,
    pub rdata: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RowDeleteParams<'a> {
    pub domain: &'a str,
    pub row_id: &'a RowId,
}

// ============ Response ============

/// Decoded `{"response": {...}}` envelope of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub struct WapiResponse {
    /// WAPI return code; below 2000 on success.
    pub code: u32,
    /// Human-readable `result` text, when WAPI sends one.
    pub result: Option<String>,
    /// The full `response` object.
    pub payload: Value,
}

impl WapiResponse {
    /// Pull `response.code` (and `result`) out of a parsed body.
    ///
    /// A missing `response` object or a missing/non-numeric `code` is a
    /// `Protocol` error. The code is *not* judged here.
    pub(crate) fn from_body(body: Value) -> Result<Self> {
        let Value::Object(mut root) = body else {
            return Err(ProviderError::protocol("response body is not a JSON object"));
        };
        let payload = root
            .remove("response")
            .ok_or_else(|| ProviderError::protocol("missing 'response' envelope"))?;
        if !payload.is_object() {
            return Err(ProviderError::protocol("'response' is not an object"));
        }

        let code = match payload.get("code") {
            None | Some(Value::Null) => {
                return Err(ProviderError::protocol("missing 'code' in response"));
            }
            Some(raw) => raw
                .as_u64()
                .and_then(|c| u32::try_from(c).ok())
                .ok_or_else(|| ProviderError::protocol(format!("non-numeric 'code': {raw}")))?,
        };

        let result = payload
            .get("result")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            code,
            result,
            payload,
        })
    }

    /// Decode `response.data`.
    ///
    /// `Ok(None)` when `data` is absent, `null`, or the empty array WAPI
    /// sends for "nothing". A `data` of any other unexpected shape is a
    /// `Protocol` error.
    pub fn data<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match self.payload.get("data") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) if items.is_empty() => Ok(None),
            Some(data) => serde_json::from_value(data.clone())
                .map(Some)
                .map_err(|e| ProviderError::protocol(format!("unexpected 'data' shape: {e}"))),
        }
    }
}

// ============ DNS rows ============

/// Provider-assigned row identifier.
///
/// WAPI may send it as a number or as a string; it is sent back exactly as
/// received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One record from `dns-rows-list`.
///
/// Only the row itself must be an object. Each field that is missing or has
/// an unusable type decodes to its empty value, so one odd row never spoils
/// the whole listing; rows without `ID` or `rdata` are skipped by lookups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WapiRow {
    #[serde(rename = "ID", default, deserialize_with = "lenient_row_id")]
    pub id: Option<RowId>,
    /// Name relative to the zone; empty for the apex.
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub ttl: Option<u32>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rdtype: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rdata: Option<String>,
}

impl WapiRow {
    /// Exact, case-sensitive comparison of `rdata`.
    pub fn has_value(&self, value: &str) -> bool {
        self.rdata.as_deref() == Some(value)
    }
}

/// `data` of `dns-rows-list`.
#[derive(Debug, Deserialize)]
pub(crate) struct RowsListData {
    #[serde(default)]
    pub row: Option<Vec<WapiRow>>,
}

fn lenient_row_id<'de, D>(deserializer: D) -> std::result::Result<Option<RowId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().map(RowId::Number),
        Value::String(s) if !s.is_empty() => Some(RowId::Text(s)),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// WAPI serializes most numbers as strings. Anything that is not a `u32`
/// reads as no TTL.
fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
