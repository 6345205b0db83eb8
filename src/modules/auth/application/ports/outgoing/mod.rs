pub mod auth_provider;
pub mod demo_token;

pub use auth_provider::{AuthProvider, AuthProviderError};
pub use demo_token::{DemoTokenError, DemoTokenProvider};
