pub mod admin_content_service;
pub mod public_content_service;

pub use admin_content_service::{AdminContentError, AdminContentService};
pub use public_content_service::PublicContentService;
