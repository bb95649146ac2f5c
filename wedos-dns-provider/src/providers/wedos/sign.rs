//! WAPI auth digest
//!
//! `auth = sha1(user + sha1(password) + HH)`, HH being the current hour on
//! WAPI's clock (Prague) as two digits. All hashes are lowercase hex.

use chrono::{DateTime, Timelike, Utc};

use crate::providers::common::sha1_hex;

use super::WedosClient;

/// Compute the WAPI auth digest from an already hashed password.
///
/// `secret_sha1` must be the lowercase hex SHA-1 of the password; `hour` is
/// 0..=23 on WAPI's clock.
pub fn auth_digest(user: &str, secret_sha1: &str, hour: u32) -> String {
    sha1_hex(&format!("{user}{secret_sha1}{hour:02}"))
}

impl WedosClient {
    /// Digest valid for the hour containing `now`.
    pub(crate) fn sign(&self, now: DateTime<Utc>) -> String {
        let hour = now.with_timezone(&self.config.timezone).hour();
        auth_digest(&self.user, &self.secret_sha1, hour)
    }
}
