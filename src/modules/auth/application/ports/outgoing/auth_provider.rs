use async_trait::async_trait;

use crate::modules::auth::application::domain::{AuthSession, Identity};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthProviderError {
    #[error("Authentication backend is not configured")]
    NotConfigured,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Auth API returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Email/password identity backend.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthProviderError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthProviderError>;

    /// Checks an access token locally; no network call.
    fn verify(&self, access_token: &str) -> Result<Identity, AuthProviderError>;
}
