//! Solver factory.

use std::sync::Arc;

use crate::config::WapiConfig;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::providers::WedosClient;
use crate::traits::Dns01Solver;

/// Creates a [`Dns01Solver`] backed by WAPI.
///
/// Only the non-empty checks of [`WedosClient`] apply; call
/// [`Credentials::validate`] first for the stricter WEDOS login rules.
///
/// # Examples
///
/// ```rust,no_run
/// use wedos_dns_provider::{create_solver, Credentials, Dns01Solver, WapiConfig};
///
/// let solver = create_solver(
///     Credentials::new("john@example.com", "wapi-password"),
///     WapiConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(solver.id(), "wedos");
/// ```
pub fn create_solver(credentials: Credentials, config: WapiConfig) -> Result<Arc<dyn Dns01Solver>> {
    let client = WedosClient::builder(credentials.user(), credentials.auth())
        .config(config)
        .build()?;
    Ok(Arc::new(client))
}
