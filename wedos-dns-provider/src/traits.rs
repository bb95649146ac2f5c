use async_trait::async_trait;

use crate::error::Result;

/// Host-facing DNS-01 capability.
///
/// The host calls [`perform`](Self::perform) before asking the ACME server to
/// validate, waits for propagation on its own schedule, then calls
/// [`cleanup`](Self::cleanup). Calls for several names are made one after
/// another.
#[async_trait]
pub trait Dns01Solver: Send + Sync {
    /// Stable solver identifier.
    fn id(&self) -> &'static str;

    /// Publish a TXT record at `fqdn` (inside `zone`) carrying `token`.
    async fn perform(&self, zone: &str, fqdn: &str, token: &str) -> Result<()>;

    /// Remove the TXT record at `fqdn` carrying `token`.
    ///
    /// A record that is already gone is not an error.
    async fn cleanup(&self, zone: &str, fqdn: &str, token: &str) -> Result<()>;
}
