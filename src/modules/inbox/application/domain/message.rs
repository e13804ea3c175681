use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::admin::application::domain::drafts::Checker;
use crate::admin::application::domain::ValidationError;

/// A message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
}

/// A validated message ready to be stored. New messages are always unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact form as submitted by a visitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    pub fn validate(&self) -> Result<NewContactMessage, ValidationError> {
        let mut check = Checker::default();

        let name = check.required("name", &self.name);
        let email = check.required("email", &self.email);
        let subject = check.required("subject", &self.subject);
        let message = check.required("message", &self.message);

        if !email.is_empty() && !EmailAddress::is_valid(&email) {
            check.invalid("email", "Invalid email format");
        }

        check.finish(NewContactMessage {
            name,
            email,
            subject,
            message,
        })
    }
}

/// Inbox listing, newest first, with the badge count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InboxSummary {
    pub messages: Vec<ContactMessage>,
    pub unread: usize,
}

impl InboxSummary {
    pub fn new(messages: Vec<ContactMessage>) -> Self {
        let unread = messages.iter().filter(|m| !m.is_read).count();
        Self { messages, unread }
    }
}
