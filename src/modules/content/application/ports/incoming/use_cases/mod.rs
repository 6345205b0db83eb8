pub mod public_content;

pub use public_content::{
    ContentLookupError, CvDocument, ProjectListFilter, PublicContentUseCase, SiteContent,
};
