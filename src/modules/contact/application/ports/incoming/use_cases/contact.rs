use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::{
    ContactMessage, ContactValidationError, NewContactMessage,
};
use crate::modules::remote_store::application::domain::Caller;
use crate::modules::remote_store::application::ports::outgoing::RemoteStoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ContactValidationError),

    #[error("Message not found")]
    NotFound,

    #[error("Remote store error: {0}")]
    Store(#[from] RemoteStoreError),
}

#[async_trait]
pub trait ContactUseCase: Send + Sync {
    /// Stores an anonymous submission as unread.
    async fn submit(&self, form: NewContactMessage) -> Result<ContactMessage, ContactError>;

    /// Newest first. The inbox is read and changed with the admin's credentials.
    async fn list(&self, caller: &Caller) -> Result<Vec<ContactMessage>, ContactError>;

    async fn set_read(
        &self,
        caller: &Caller,
        id: Uuid,
        read: bool,
    ) -> Result<ContactMessage, ContactError>;

    async fn delete(&self, caller: &Caller, id: Uuid) -> Result<(), ContactError>;
}
