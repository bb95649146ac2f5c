//! # wedos-dns-provider
//!
//! Answer ACME DNS-01 challenges for zones hosted at
//! [WEDOS](https://www.wedos.com/) by creating and removing TXT records
//! through WAPI, the WEDOS remote API.
//!
//! The crate does not speak ACME. A host (certificate manager, renewal
//! daemon) drives it through two calls on [`Dns01Solver`]:
//!
//! - [`perform`](Dns01Solver::perform) stages the TXT row and commits the zone;
//! - [`cleanup`](Dns01Solver::cleanup) finds the row by its value, deletes it
//!   and commits again.
//!
//! Waiting for DNS propagation between the two is the host's job.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static and cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wedos_dns_provider::{Dns01Solver, WedosClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WedosClient::new("john@example.com", "wapi-password")?;
//!
//!     client
//!         .perform("example.com", "_acme-challenge.example.com", "token-value")
//!         .await?;
//!     // ... let the ACME server validate ...
//!     client
//!         .cleanup("example.com", "_acme-challenge.example.com", "token-value")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! Every WAPI request carries `auth = sha1(user + sha1(password) + HH)` where
//! `HH` is the current hour in Prague. See [`auth_digest`].
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::Transport`]: network failure, timeout or non-2xx HTTP status
//! - [`ProviderError::Protocol`]: the body is not the JSON WAPI promises
//! - [`ProviderError::Remote`]: WAPI return code 2000 or above
//!
//! An authentication rejection is retried once with a fresh digest, to ride
//! over the hour boundary. Nothing else is retried.

mod config;
mod credentials;
mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result, WAPI_RETURN_CODES_URL};

// Re-export configuration
pub use config::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_TIMEZONE,
    DEFAULT_TTL, WapiConfig,
};

// Re-export credentials
pub use credentials::{CredentialValidationError, Credentials, MIN_SECRET_LEN};

// Re-export factory functions
pub use factory::create_solver;

// Re-export core trait
pub use traits::Dns01Solver;

// Re-export the WAPI client and its wire types
pub use providers::{
    RowId, WapiCommand, WapiResponse, WapiRow, WedosClient, WedosClientBuilder, auth_digest,
};

// Re-export utils
pub use utils::domain::relative_name;
