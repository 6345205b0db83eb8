use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::modules::auth::application::domain::{DemoPolicy, Identity};
use crate::modules::auth::application::ports::outgoing::{
    AuthProvider, AuthProviderError, DemoTokenError, DemoTokenProvider,
};
use crate::modules::client_state::application::domain::keys::{ADMIN_ACCESS_TOKEN, DEMO_MODE};
use crate::modules::client_state::application::ports::outgoing::{ClientStorage, StorageScope};
use crate::modules::remote_store::application::domain::Caller;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Sign-in is not available")]
    NotConfigured,

    #[error("Auth provider error: {0}")]
    Provider(String),
}

impl From<DemoTokenError> for AuthError {
    fn from(e: DemoTokenError) -> Self {
        AuthError::Provider(e.to_string())
    }
}

impl From<AuthProviderError> for AuthError {
    fn from(e: AuthProviderError) -> Self {
        match e {
            AuthProviderError::InvalidCredentials => AuthError::InvalidCredentials,
            AuthProviderError::NotConfigured => AuthError::NotConfigured,
            other => AuthError::Provider(other.to_string()),
        }
    }
}

/// Admin sign-in state kept in client storage.
///
/// The demo pair never reaches the provider: it stores a signed demo flag,
/// and the static demo identity is derived from that flag. Store calls made
/// for the demo identity carry no user credentials.
#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
    demo: DemoPolicy,
    demo_tokens: Arc<dyn DemoTokenProvider>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("demo_enabled", &self.demo.enabled)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(
        provider: Arc<dyn AuthProvider>,
        demo: DemoPolicy,
        demo_tokens: Arc<dyn DemoTokenProvider>,
    ) -> Self {
        Self {
            provider,
            demo,
            demo_tokens,
        }
    }

    pub async fn sign_in(
        &self,
        storage: &dyn ClientStorage,
        username: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        if self.demo.matches(username, password) {
            let flag = self.demo_tokens.issue()?;
            storage.set(StorageScope::Durable, DEMO_MODE, &flag);
            storage.remove(StorageScope::Durable, ADMIN_ACCESS_TOKEN);
            info!("Demo sign-in");
            return Ok(Identity::demo());
        }

        let session = self.provider.sign_in(username.trim(), password).await?;

        storage.set(StorageScope::Durable, ADMIN_ACCESS_TOKEN, &session.access_token);
        storage.remove(StorageScope::Durable, DEMO_MODE);
        info!(user_id = %session.identity.user_id, "Admin signed in");
        Ok(session.identity)
    }

    /// Identity held by this browser, if any.
    pub fn current_identity(&self, storage: &dyn ClientStorage) -> Option<Identity> {
        self.current_credentials(storage).map(|(identity, _)| identity)
    }

    /// Identity held by this browser and the credentials its store calls
    /// carry. A demo flag only counts when this service signed it.
    pub fn current_credentials(&self, storage: &dyn ClientStorage) -> Option<(Identity, Caller)> {
        if self.demo.enabled {
            if let Some(flag) = storage.get(StorageScope::Durable, DEMO_MODE) {
                match self.demo_tokens.verify(&flag) {
                    Ok(()) => return Some((Identity::demo(), Caller::Anonymous)),
                    Err(e) => debug!(error = %e, "Rejected demo flag"),
                }
            }
        }

        let token = storage.get(StorageScope::Durable, ADMIN_ACCESS_TOKEN)?;
        self.credentials_from_token(token)
    }

    /// Verified identity for a bearer access token, with that token as the
    /// store credentials.
    pub fn credentials_from_token(&self, token: String) -> Option<(Identity, Caller)> {
        match self.provider.verify(&token) {
            Ok(identity) => Some((identity, Caller::User(token))),
            Err(e) => {
                debug!(error = %e, "Rejected access token");
                None
            }
        }
    }

    /// Clears the demo flag and the stored token. Provider sign-out failures
    /// are logged; the browser is signed out either way.
    pub async fn sign_out(&self, storage: &dyn ClientStorage) {
        storage.remove(StorageScope::Durable, DEMO_MODE);

        if let Some(token) = storage.get(StorageScope::Durable, ADMIN_ACCESS_TOKEN) {
            storage.remove(StorageScope::Durable, ADMIN_ACCESS_TOKEN);
            if let Err(e) = self.provider.sign_out(&token).await {
                warn!(error = %e, "Provider sign-out failed");
            }
        }
        info!("Signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    use crate::modules::auth::adapter::outgoing::jwt::DemoTokenSigner;
    use crate::modules::auth::application::domain::AuthSession;
    use crate::modules::client_state::adapter::outgoing::MemoryStorage;

    mock! {
        pub Provider {}

        #[async_trait]
        impl AuthProvider for Provider {
            async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthProviderError>;
            async fn sign_out(&self, access_token: &str) -> Result<(), AuthProviderError>;
            fn verify(&self, access_token: &str) -> Result<Identity, AuthProviderError>;
        }
    }

    fn auth_service(provider: MockProvider, demo: DemoPolicy) -> AuthService {
        let signer = DemoTokenSigner::new(b"auth-service-test-secret-0123456789");
        AuthService::new(Arc::new(provider), demo, Arc::new(signer))
    }

    fn admin() -> Identity {
        Identity {
            user_id: "u-1".into(),
            email: Some("admin@example.com".into()),
            demo: false,
        }
    }

    #[tokio::test]
    async fn demo_pair_signs_in_without_calling_the_provider() {
        let mut provider = MockProvider::new();
        provider.expect_sign_in().never();
        provider.expect_sign_out().never();
        let service = auth_service(provider, DemoPolicy::default());
        let storage = MemoryStorage::new();

        let identity = service.sign_in(&storage, "demo", "demo").await.unwrap();

        assert!(identity.demo);
        assert_ne!(
            storage.get(StorageScope::Durable, DEMO_MODE).as_deref(),
            Some("true")
        );
        assert_eq!(
            service.current_credentials(&storage),
            Some((Identity::demo(), Caller::Anonymous))
        );

        service.sign_out(&storage).await;
        assert!(storage.get(StorageScope::Durable, DEMO_MODE).is_none());
        assert_eq!(service.current_identity(&storage), None);
    }

    #[tokio::test]
    async fn provider_sign_in_stores_the_access_token() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_in()
            .with(eq("admin@example.com"), eq("secret"))
            .times(1)
            .returning(|_, _| {
                Ok(AuthSession {
                    access_token: "token-1".into(),
                    expires_in: Some(3600),
                    identity: admin(),
                })
            });
        provider
            .expect_verify()
            .with(eq("token-1"))
            .returning(|_| Ok(admin()));
        let service = auth_service(provider, DemoPolicy::default());
        let storage = MemoryStorage::new();

        let identity = service
            .sign_in(&storage, " admin@example.com ", "secret")
            .await
            .unwrap();

        assert_eq!(identity, admin());
        assert_eq!(
            storage.get(StorageScope::Durable, ADMIN_ACCESS_TOKEN).as_deref(),
            Some("token-1")
        );
        assert_eq!(
            service.current_credentials(&storage),
            Some((admin(), Caller::User("token-1".into())))
        );
    }

    #[tokio::test]
    async fn bad_credentials_leave_the_browser_signed_out() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_in()
            .returning(|_, _| Err(AuthProviderError::InvalidCredentials));
        let service = auth_service(provider, DemoPolicy::default());
        let storage = MemoryStorage::new();

        let err = service
            .sign_in(&storage, "admin@example.com", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(service.current_identity(&storage), None);
    }

    #[tokio::test]
    async fn disabled_demo_pair_goes_to_the_provider() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_in()
            .times(1)
            .returning(|_, _| Err(AuthProviderError::NotConfigured));
        let policy = DemoPolicy {
            enabled: false,
            ..DemoPolicy::default()
        };
        let service = auth_service(provider, policy);
        let storage = MemoryStorage::new();

        let err = service.sign_in(&storage, "demo", "demo").await.unwrap_err();
        assert_eq!(err, AuthError::NotConfigured);
    }

    #[tokio::test]
    async fn sign_out_ignores_provider_failures() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_out()
            .times(1)
            .returning(|_| Err(AuthProviderError::Transport("timeout".into())));
        provider
            .expect_verify()
            .returning(|_| Err(AuthProviderError::InvalidToken("gone".into())));
        let service = auth_service(provider, DemoPolicy::default());
        let storage = MemoryStorage::new();
        storage.set(StorageScope::Durable, ADMIN_ACCESS_TOKEN, "token-1");

        service.sign_out(&storage).await;

        assert!(storage
            .get(StorageScope::Durable, ADMIN_ACCESS_TOKEN)
            .is_none());
        assert_eq!(service.current_identity(&storage), None);
    }

    #[tokio::test]
    async fn unsigned_demo_flag_is_ignored() {
        let mut provider = MockProvider::new();
        provider.expect_verify().never();
        let service = auth_service(provider, DemoPolicy::default());
        let storage = MemoryStorage::new();
        storage.set(StorageScope::Durable, DEMO_MODE, "true");

        assert_eq!(service.current_identity(&storage), None);
    }

    #[tokio::test]
    async fn signed_demo_flag_stops_counting_once_demo_is_disabled() {
        let signer = DemoTokenSigner::new(b"auth-service-test-secret-0123456789");
        let storage = MemoryStorage::new();
        storage.set(StorageScope::Durable, DEMO_MODE, &signer.issue().unwrap());

        let policy = DemoPolicy {
            enabled: false,
            ..DemoPolicy::default()
        };
        let service = auth_service(MockProvider::new(), policy);

        assert_eq!(service.current_identity(&storage), None);
    }
}
