pub mod access_token_verifier;
pub mod demo_token_signer;

pub use access_token_verifier::AccessTokenVerifier;
pub use demo_token_signer::DemoTokenSigner;
