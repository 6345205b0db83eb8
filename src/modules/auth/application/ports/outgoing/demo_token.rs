#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DemoTokenError {
    #[error("Failed to sign demo token: {0}")]
    Signing(String),

    #[error("Invalid demo token: {0}")]
    Invalid(String),
}

/// Issues and checks the signed value a browser holds after signing in with
/// the demo pair. A value this process did not sign never verifies.
pub trait DemoTokenProvider: Send + Sync {
    fn issue(&self) -> Result<String, DemoTokenError>;

    fn verify(&self, token: &str) -> Result<(), DemoTokenError>;
}
