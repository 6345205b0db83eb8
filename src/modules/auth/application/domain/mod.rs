pub mod entities;

pub use entities::{AccessTokenClaims, AuthSession, DemoPolicy, Identity};
