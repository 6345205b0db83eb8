pub mod message;

pub use message::{ContactColumn, ContactMessage, ContactValidationError, NewContactMessage};
