pub mod gotrue_provider;
pub mod jwt;
pub mod unconfigured_provider;

pub use gotrue_provider::GoTrueAuthProvider;
pub use unconfigured_provider::UnconfiguredAuthProvider;
