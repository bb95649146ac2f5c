//! WAPI credentials
//!
//! A WAPI login is the account e-mail plus the separate WAPI password set in
//! the customer centre. Loading them (INI file, env, secret store) is the
//! host's job; this module only holds and checks them.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum WAPI password length accepted by [`Credentials::validate`].
pub const MIN_SECRET_LEN: usize = 8;

/// Why a credential pair was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    #[error("Missing required field: {label}")]
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    #[error("Field must not be empty: {label}")]
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field has an invalid format.
    #[error("{label}: {reason}")]
    InvalidFormat {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

/// WAPI account identifier and secret. Immutable once built.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    user: String,
    auth: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, auth: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            auth: auth.into(),
        }
    }

    /// Builds credentials from a flat key/value map using the `user` and
    /// `auth` keys.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, CredentialValidationError> {
        Ok(Self {
            user: Self::get_required_field(map, "user", "WAPI user (e-mail)")?,
            auth: Self::get_required_field(map, "auth", "WAPI password")?,
        })
    }

    fn get_required_field(
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        let value = map
            .get(key)
            .ok_or_else(|| CredentialValidationError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            })?;

        if value.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            });
        }

        Ok(value.clone())
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn auth(&self) -> &str {
        &self.auth
    }

    /// Checks the rules WEDOS applies to WAPI logins: the user is an e-mail
    /// address and the password has at least [`MIN_SECRET_LEN`] characters.
    ///
    /// [`WedosClient`](crate::WedosClient) does not call this; hosts that want
    /// early feedback can.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        if self.user.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                field: "user".to_string(),
                label: "WAPI user (e-mail)".to_string(),
            });
        }
        if self.auth.is_empty() {
            return Err(CredentialValidationError::EmptyField {
                field: "auth".to_string(),
                label: "WAPI password".to_string(),
            });
        }
        if !self.user.contains('@') {
            return Err(CredentialValidationError::InvalidFormat {
                field: "user".to_string(),
                label: "WAPI user (e-mail)".to_string(),
                reason: "expected an e-mail address".to_string(),
            });
        }
        if self.auth.chars().count() < MIN_SECRET_LEN {
            return Err(CredentialValidationError::InvalidFormat {
                field: "auth".to_string(),
                label: "WAPI password".to_string(),
                reason: format!("must be at least {MIN_SECRET_LEN} characters"),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("auth", &"<redacted>")
            .finish()
    }
}
