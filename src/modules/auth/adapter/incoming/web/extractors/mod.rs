mod admin_identity;

pub use admin_identity::{AdminIdentity, VerifiedAdmin};
