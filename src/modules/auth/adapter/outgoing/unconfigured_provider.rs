use async_trait::async_trait;

use crate::modules::auth::application::domain::{AuthSession, Identity};
use crate::modules::auth::application::ports::outgoing::{AuthProvider, AuthProviderError};

/// Used when no auth backend is configured. Only the demo pair can sign in.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredAuthProvider;

#[async_trait]
impl AuthProvider for UnconfiguredAuthProvider {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<AuthSession, AuthProviderError> {
        Err(AuthProviderError::NotConfigured)
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthProviderError> {
        Ok(())
    }

    fn verify(&self, _access_token: &str) -> Result<Identity, AuthProviderError> {
        Err(AuthProviderError::NotConfigured)
    }
}
