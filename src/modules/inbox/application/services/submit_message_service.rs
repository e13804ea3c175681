use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::inbox::application::domain::{ContactForm, ContactMessage};
use crate::inbox::application::ports::incoming::use_cases::{InboxError, SubmitMessageUseCase};
use crate::inbox::application::ports::outgoing::MessageStore;
use crate::shared::deadline::with_deadline;

pub struct SubmitMessageService<S>
where
    S: MessageStore,
{
    store: S,
    write_timeout: Duration,
}

impl<S> SubmitMessageService<S>
where
    S: MessageStore,
{
    pub fn new(store: S, write_timeout: Duration) -> Self {
        Self {
            store,
            write_timeout,
        }
    }
}

#[async_trait]
impl<S> SubmitMessageUseCase for SubmitMessageService<S>
where
    S: MessageStore + Send + Sync,
{
    async fn execute(&self, form: ContactForm) -> Result<ContactMessage, InboxError> {
        if !self.store.is_configured() {
            warn!("Contact message refused, backend not configured");
            return Err(InboxError::NotConfigured);
        }

        let message = form.validate()?;
        let stored = with_deadline(self.write_timeout, self.store.insert(message)).await?;

        info!(message_id = stored.id, "Contact message received");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory_store::InMemoryMessageStore;

    fn form() -> ContactForm {
        ContactForm {
            name: Some("Jo".to_string()),
            email: Some("jo@example.com".to_string()),
            subject: Some("Hello".to_string()),
            message: Some("Nice site".to_string()),
        }
    }

    #[tokio::test]
    async fn stores_unread_message() {
        // Arrange
        let store = InMemoryMessageStore::new();
        let service = SubmitMessageService::new(store.clone(), Duration::from_secs(1));

        // Act
        let stored = service.execute(form()).await.unwrap();

        // Assert
        assert!(!stored.is_read);
        assert_eq!(stored.subject, "Hello");
        assert_eq!(store.ids(), vec![stored.id]);
    }

    #[tokio::test]
    async fn invalid_form_is_not_stored() {
        // Arrange
        let store = InMemoryMessageStore::new();
        let service = SubmitMessageService::new(store.clone(), Duration::from_secs(1));

        // Act
        let result = service
            .execute(ContactForm {
                message: None,
                ..form()
            })
            .await;

        // Assert
        assert!(matches!(result, Err(InboxError::Validation(ref e)) if e.has_field("message")));
        assert!(store.ids().is_empty());
    }

    #[tokio::test]
    async fn unconfigured_backend_is_refused() {
        // Arrange
        let service =
            SubmitMessageService::new(InMemoryMessageStore::unconfigured(), Duration::from_secs(1));

        // Act
        let result = service.execute(form()).await;

        // Assert
        assert_eq!(result, Err(InboxError::NotConfigured));
    }
}
