use async_trait::async_trait;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::modules::contact::application::domain::{
    ContactColumn, ContactMessage, NewContactMessage,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, ContactUseCase,
};
use crate::modules::remote_store::application::domain::{Caller, Query};
use crate::modules::remote_store::application::services::DataAccess;

#[derive(Debug, Clone)]
pub struct ContactService {
    access: DataAccess,
}

impl ContactService {
    pub fn new(access: DataAccess) -> Self {
        Self { access }
    }
}

#[async_trait]
impl ContactUseCase for ContactService {
    async fn submit(&self, form: NewContactMessage) -> Result<ContactMessage, ContactError> {
        let message = form.into_message()?;

        let mut stored = self.access.insert(std::slice::from_ref(&message)).await?;
        info!(email = %message.email, "Contact message received");

        Ok(if stored.is_empty() {
            message
        } else {
            stored.swap_remove(0)
        })
    }

    async fn list(&self, caller: &Caller) -> Result<Vec<ContactMessage>, ContactError> {
        let query = Query::<ContactMessage>::new().order_by(ContactColumn::CreatedAt, false);
        Ok(self.access.for_caller(caller).select(&query).await?)
    }

    async fn set_read(
        &self,
        caller: &Caller,
        id: Uuid,
        read: bool,
    ) -> Result<ContactMessage, ContactError> {
        self.access
            .for_caller(caller)
            .update::<ContactMessage>(id, json!({ "read": read }))
            .await?
            .ok_or(ContactError::NotFound)
    }

    async fn delete(&self, caller: &Caller, id: Uuid) -> Result<(), ContactError> {
        self.access.for_caller(caller).delete::<ContactMessage>(id).await?;
        info!(%id, "Contact message deleted");
        Ok(())
    }
}
