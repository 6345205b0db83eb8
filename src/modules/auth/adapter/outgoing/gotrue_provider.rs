//! Email/password sign-in against the hosted auth service (`{url}/auth/v1`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::modules::auth::adapter::outgoing::jwt::AccessTokenVerifier;
use crate::modules::auth::application::domain::{AuthSession, Identity};
use crate::modules::auth::application::ports::outgoing::{AuthProvider, AuthProviderError};
use crate::shared::config::RemoteStoreConfig;

#[derive(Debug, Clone)]
pub struct GoTrueAuthProvider {
    client: reqwest::Client,
    auth_url: String,
    verifier: Option<AccessTokenVerifier>,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl GoTrueAuthProvider {
    /// Without a JWT secret, sign-in works but stored tokens cannot be verified.
    pub fn new(
        config: &RemoteStoreConfig,
        jwt_secret: Option<&str>,
    ) -> Result<Self, AuthProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.api_key)
                .map_err(|e| AuthProviderError::Transport(format!("invalid API key header: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AuthProviderError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            auth_url: format!("{}/auth/v1", config.url.trim_end_matches('/')),
            verifier: jwt_secret.map(AccessTokenVerifier::new),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthProviderError> {
        Url::parse(&format!("{}/{}", self.auth_url, path))
            .map_err(|e| AuthProviderError::Transport(format!("invalid auth URL: {e}")))
    }

    fn token_url(&self) -> Result<Url, AuthProviderError> {
        let mut url = self.endpoint("token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");
        Ok(url)
    }
}

#[async_trait]
impl AuthProvider for GoTrueAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthProviderError> {
        let url = self.token_url()?;
        debug!(%url, "password sign-in");

        let response = self
            .client
            .post(url)
            .json(&PasswordGrant { email, password })
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            return Err(AuthProviderError::InvalidCredentials);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AuthProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthProviderError::Api {
                status: status.as_u16(),
                message: format!("unexpected token response: {e}"),
            })?;

        Ok(AuthSession {
            access_token: body.access_token,
            expires_in: body.expires_in,
            identity: Identity {
                user_id: body.user.id,
                email: body.user.email,
                demo: false,
            },
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthProviderError> {
        let response = self
            .client
            .post(self.endpoint("logout")?)
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            Ok(())
        } else {
            Err(AuthProviderError::Api {
                status: status.as_u16(),
                message: "logout rejected".to_string(),
            })
        }
    }

    fn verify(&self, access_token: &str) -> Result<Identity, AuthProviderError> {
        match &self.verifier {
            Some(verifier) => verifier.verify(access_token),
            None => Err(AuthProviderError::NotConfigured),
        }
    }
}

fn transport(e: reqwest::Error) -> AuthProviderError {
    AuthProviderError::Transport(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RemoteStoreConfig {
        RemoteStoreConfig {
            url: "https://example.supabase.co/".into(),
            api_key: "anon".into(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn builds_password_grant_url() {
        let provider = GoTrueAuthProvider::new(&config(), None).unwrap();
        assert_eq!(
            provider.token_url().unwrap().as_str(),
            "https://example.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(
            provider.endpoint("logout").unwrap().as_str(),
            "https://example.supabase.co/auth/v1/logout"
        );
    }

    #[test]
    fn verify_without_secret_is_not_configured() {
        let provider = GoTrueAuthProvider::new(&config(), None).unwrap();
        assert_eq!(
            provider.verify("anything"),
            Err(AuthProviderError::NotConfigured)
        );
    }
}
