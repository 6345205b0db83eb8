pub mod contact;

pub use contact::{ContactError, ContactUseCase};
