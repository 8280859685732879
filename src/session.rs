//! Boundary to the external identity collaborator.
//!
//! Credential management lives outside this crate; the board only needs to
//! know whether a session is valid. This module types that boundary: the
//! credential payloads the auth forms produce, the session status the shell
//! consults before mounting the board, and the provider trait the host
//! implements against its identity service.

use crate::error::{FlowdeckError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Email/password pair entered in the sign-in and sign-up forms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }

    /// Form-level validation applied before credentials are submitted
    ///
    /// Matches what the sign-in/sign-up forms enforce: a plausible email
    /// address and a non-empty password. Anything stricter is the identity
    /// provider's call.
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(FlowdeckError::InvalidEmail(self.email.clone()));
        }
        if self.password.is_empty() {
            return Err(FlowdeckError::EmptyPassword);
        }
        Ok(())
    }
}

/// Session status reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    Authenticated { access_token: String },
    Unauthenticated,
}

impl AuthStatus {
    /// Whether the shell should mount the board
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// External identity service the application shell signs in against
///
/// The core never interprets provider failures; they surface as the opaque
/// [`FlowdeckError::Identity`] and are passed through to the UI.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Registers a new account; confirmation happens out of band
    async fn sign_up(&self, credentials: &Credentials) -> Result<()>;

    /// Exchanges credentials for a session
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthStatus>;

    /// Ends the current session
    async fn sign_out(&self) -> Result<()>;

    /// Sends a password-reset message to the given address
    async fn request_password_reset(&self, email: &str) -> Result<()>;

    /// Sets a new password for the signed-in account
    async fn update_password(&self, new_password: &str) -> Result<()>;

    /// Current session status
    async fn session(&self) -> AuthStatus;
}
