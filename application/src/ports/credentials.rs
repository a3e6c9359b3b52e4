//! Credential ports
//!
//! Password verification and token issuance are delegated to adapters; the
//! application layer only defines the contracts. The deployed composition
//! root injects the concrete hashing/signing services.

use jokehub_domain::{PasswordHash, User};
use thiserror::Error;

/// Verifies a plaintext password against a stored hash
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, plain: &str, hash: &PasswordHash) -> bool;
}

/// Errors that can occur while issuing an access token
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Issues access tokens for authenticated users
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<String, TokenError>;
}
