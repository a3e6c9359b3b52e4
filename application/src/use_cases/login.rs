//! Login use case

use crate::ports::credentials::{CredentialVerifier, TokenError, TokenIssuer};
use jokehub_domain::{RepositoryError, UserEmail, UserProfile, UserRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during login
///
/// Unknown email, malformed email, and wrong password all collapse into
/// `InvalidCredentials` so the caller cannot probe which accounts exist.
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Input for [`Login`]
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Output of a successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub token: String,
}

/// Use case authenticating a user and issuing an access token
pub struct Login {
    users: Arc<dyn UserRepository>,
    verifier: Arc<dyn CredentialVerifier>,
    tokens: Arc<dyn TokenIssuer>,
}

impl Login {
    pub fn new(
        users: Arc<dyn UserRepository>,
        verifier: Arc<dyn CredentialVerifier>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            verifier,
            tokens,
        }
    }

    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let email =
            UserEmail::new(&request.email).map_err(|_| LoginError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        if !self.verifier.verify(&request.password, &user.password) {
            warn!(email = %email, "Login rejected: bad password");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;
        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            user: user.profile(),
            token,
        })
    }
}
