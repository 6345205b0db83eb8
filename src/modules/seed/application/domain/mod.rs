pub mod natural_key;
pub mod sample_content;

pub use natural_key::NaturalKey;
pub use sample_content::SampleContent;
