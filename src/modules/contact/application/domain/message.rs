use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::remote_store::application::domain::record::{Column, Record};

const MAX_NAME: usize = 120;
const MAX_EMAIL: usize = 254;
const MAX_SUBJECT: usize = 200;
const MAX_MESSAGE: usize = 5000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub enum ContactColumn {
    Id,
    Read,
    CreatedAt,
}

impl Column for ContactColumn {
    fn name(&self) -> &'static str {
        match self {
            ContactColumn::Id => "id",
            ContactColumn::Read => "read",
            ContactColumn::CreatedAt => "created_at",
        }
    }
}

impl Record for ContactMessage {
    const TABLE: &'static str = "contact_messages";
    type Column = ContactColumn;

    fn key_column() -> ContactColumn {
        ContactColumn::Id
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("{field} is longer than {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// A message as submitted from the public contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl NewContactMessage {
    /// Trims every field and checks it. Messages without a subject get
    /// a generic one.
    pub fn into_message(self) -> Result<ContactMessage, ContactValidationError> {
        let name = checked("name", &self.name, MAX_NAME)?;
        let email = checked("email", &self.email, MAX_EMAIL)?;
        if !EmailAddress::is_valid(&email) {
            return Err(ContactValidationError::InvalidEmail(email));
        }
        let subject = match self.subject.trim() {
            "" => "Website enquiry".to_string(),
            s => checked("subject", s, MAX_SUBJECT)?,
        };
        let message = checked("message", &self.message, MAX_MESSAGE)?;

        Ok(ContactMessage {
            id: None,
            name,
            email,
            subject,
            message,
            read: false,
            created_at: None,
        })
    }
}

fn checked(field: &'static str, value: &str, max: usize) -> Result<String, ContactValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactValidationError::EmptyField(field));
    }
    if value.chars().count() > max {
        return Err(ContactValidationError::TooLong { field, max });
    }
    Ok(value.to_string())
}
