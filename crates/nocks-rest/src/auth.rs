//! Bearer token credential
//!
//! The token is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretString};

use crate::error::{RestError, RestResult};

/// Personal access token used to authenticate private endpoints
///
/// Supplied once at client construction and never changed afterwards.
pub struct Credential {
    token: SecretString,
}

impl Credential {
    /// Create a credential from a bearer token
    ///
    /// Fails with `InvalidArgument` if the token is empty or whitespace.
    pub fn new(token: impl Into<String>) -> RestResult<Self> {
        let token: String = token.into();
        if token.trim().is_empty() {
            return Err(RestError::invalid("bearer token must not be empty"));
        }

        Ok(Self {
            token: SecretString::from(token),
        })
    }

    /// Value for the `Authorization` header
    pub(crate) fn authorization(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }
}

impl Clone for Credential {
    fn clone(&self) -> Self {
        Self {
            token: SecretString::from(self.token.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
