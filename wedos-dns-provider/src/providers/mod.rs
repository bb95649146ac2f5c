//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod wedos;

pub use wedos::{WedosClient, WedosClientBuilder};
pub(crate) use wedos::WAPI_CODE_AUTH_FAILED;
pub use wedos::{RowId, WapiCommand, WapiResponse, WapiRow, auth_digest};
