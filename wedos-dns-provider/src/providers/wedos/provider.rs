//! `ping`, credential check and the `Dns01Solver` implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Dns01Solver;

use super::WedosClient;
use super::types::{WapiCommand, WapiResponse};

impl WedosClient {
    /// WAPI `ping`: checks reachability, credentials and the caller's IP
    /// allow-list in one round trip.
    pub async fn ping(&self) -> Result<WapiResponse> {
        self.command(WapiCommand::Ping, None::<&()>).await
    }

    /// `Ok(false)` when WAPI rejects the login, `Ok(true)` when `ping`
    /// succeeds, any other failure as-is.
    pub async fn validate_credentials(&self) -> Result<bool> {
        match self.ping().await {
            Ok(_) => Ok(true),
            Err(e) if e.is_auth_rejection() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl Dns01Solver for WedosClient {
    fn id(&self) -> &'static str {
        "wedos"
    }

    async fn perform(&self, zone: &str, fqdn: &str, token: &str) -> Result<()> {
        self.add_validation_record(fqdn, zone, token).await
    }

    async fn cleanup(&self, zone: &str, fqdn: &str, token: &str) -> Result<()> {
        self.delete_validation_record(fqdn, zone, token).await
    }
}
