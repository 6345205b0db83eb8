use std::fmt;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::modules::auth::application::domain::{AccessTokenClaims, Identity};
use crate::modules::auth::application::ports::outgoing::AuthProviderError;

const AUDIENCE: &str = "authenticated";

/// Verifies HS256 access tokens issued by the hosted auth service.
#[derive(Clone)]
pub struct AccessTokenVerifier {
    decoding_key: DecodingKey,
}

impl fmt::Debug for AccessTokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenVerifier").finish_non_exhaustive()
    }
}

impl AccessTokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn verify(&self, token: &str) -> Result<Identity, AuthProviderError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.set_audience(&[AUDIENCE]);

        let decoded = decode::<AccessTokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                        "expired"
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid token signature detected");
                        "bad signature"
                    }
                    ErrorKind::InvalidAudience => "wrong audience",
                    _ => {
                        tracing::warn!("Token verification failed: malformed token");
                        "malformed"
                    }
                };
                AuthProviderError::InvalidToken(reason.to_string())
            })?;

        Ok(Identity {
            user_id: decoded.claims.sub,
            email: decoded.claims.email,
            demo: false,
        })
    }
}
