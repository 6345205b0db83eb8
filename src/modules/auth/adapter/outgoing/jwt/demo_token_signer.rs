use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::modules::auth::application::ports::outgoing::{DemoTokenError, DemoTokenProvider};

const AUDIENCE: &str = "portfolio-demo";
const SUBJECT: &str = "demo";
const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
struct DemoClaims {
    sub: String,
    aud: String,
    iat: i64,
    exp: i64,
}

/// HS256 signer for the demo sign-in flag.
#[derive(Clone)]
pub struct DemoTokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for DemoTokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoTokenSigner").finish_non_exhaustive()
    }
}

impl DemoTokenSigner {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Signer with a per-process secret; its tokens stop verifying on restart.
    pub fn ephemeral() -> Self {
        let mut secret = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self::new(&secret)
    }

    fn issue_at(&self, now: chrono::DateTime<Utc>) -> Result<String, DemoTokenError> {
        let claims = DemoClaims {
            sub: SUBJECT.to_string(),
            aud: AUDIENCE.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DemoTokenError::Signing(e.to_string()))
    }
}

impl DemoTokenProvider for DemoTokenSigner {
    fn issue(&self) -> Result<String, DemoTokenError> {
        self.issue_at(Utc::now())
    }

    fn verify(&self, token: &str) -> Result<(), DemoTokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[AUDIENCE]);
        validation.sub = Some(SUBJECT.to_string());

        decode::<DemoClaims>(token, &self.decoding_key, &validation)
            .map(|_| ())
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "expired",
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Demo flag with a foreign signature rejected");
                        "bad signature"
                    }
                    ErrorKind::InvalidAudience | ErrorKind::InvalidSubject => "wrong claims",
                    _ => "malformed",
                };
                DemoTokenError::Invalid(reason.to_string())
            })
    }
}
