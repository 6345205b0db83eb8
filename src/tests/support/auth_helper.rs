use actix_web::cookie::Cookie;
use actix_web::http::header;
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::modules::auth::adapter::outgoing::jwt::DemoTokenSigner;
use crate::modules::auth::application::domain::{AuthSession, Identity};
use crate::modules::auth::application::ports::outgoing::{
    AuthProvider, AuthProviderError, DemoTokenProvider,
};
use crate::modules::client_state::application::domain::keys::DEMO_MODE;

/// Access token `StaticTokenProvider` accepts.
pub const ADMIN_TOKEN: &str = "admin-access-token";

const DEMO_SECRET: &[u8] = b"test-demo-secret-0123456789abcdef";

pub fn demo_signer() -> DemoTokenSigner {
    DemoTokenSigner::new(DEMO_SECRET)
}

/// Cookie a browser holds after signing in with the demo pair.
pub fn demo_cookie() -> Cookie<'static> {
    let flag = demo_signer().issue().unwrap();
    Cookie::new(DEMO_MODE, URL_SAFE_NO_PAD.encode(flag))
}

/// Demo flag written by hand instead of issued at sign-in.
pub fn unsigned_demo_cookie() -> Cookie<'static> {
    Cookie::new(DEMO_MODE, URL_SAFE_NO_PAD.encode("true"))
}

pub fn admin_bearer() -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
}

pub fn admin_identity() -> Identity {
    Identity {
        user_id: "admin-1".into(),
        email: Some("admin@example.com".into()),
        demo: false,
    }
}

/// Verifies `ADMIN_TOKEN` only; every password sign-in fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTokenProvider;

#[async_trait]
impl AuthProvider for StaticTokenProvider {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<AuthSession, AuthProviderError> {
        Err(AuthProviderError::InvalidCredentials)
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthProviderError> {
        Ok(())
    }

    fn verify(&self, access_token: &str) -> Result<Identity, AuthProviderError> {
        if access_token == ADMIN_TOKEN {
            Ok(admin_identity())
        } else {
            Err(AuthProviderError::InvalidToken("unknown".into()))
        }
    }
}
