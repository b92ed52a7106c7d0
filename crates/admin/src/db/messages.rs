//! Message repository.

use chrono::Utc;
use diverse_capital_core::MessageId;

use super::Store;
use crate::models::{Message, MessagePatch, NewMessage};

/// Repository for contact-form messages.
pub struct MessageRepository<'a> {
    store: &'a Store,
}

impl<'a> MessageRepository<'a> {
    /// Create a new message repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all messages in insertion order.
    pub async fn list(&self) -> Vec<Message> {
        self.store.read().await.messages.clone()
    }

    /// Store a contact-form submission under a fresh ID.
    pub async fn create(&self, new: NewMessage) -> Message {
        let mut data = self.store.write().await;

        let id = loop {
            let candidate = MessageId::generate();
            if !data.messages.iter().any(|m| m.id == candidate) {
                break candidate;
            }
        };

        let message = new.into_message(id, Utc::now());
        data.messages.push(message.clone());
        message
    }

    /// Merge `patch` into an existing message.
    ///
    /// Returns `None` if no message has this ID.
    pub async fn update(&self, id: &MessageId, patch: MessagePatch) -> Option<Message> {
        let mut data = self.store.write().await;
        let message = data.messages.iter_mut().find(|m| &m.id == id)?;
        patch.apply_to(message);
        Some(message.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_mark_read() {
        let store = Store::empty();
        let repo = store.messages();

        let created = repo
            .create(NewMessage {
                name: "Jane".to_string(),
                subject: "Agriculture".to_string(),
                ..NewMessage::default()
            })
            .await;
        assert!(!created.is_read);

        let updated = repo
            .update(
                &created.id,
                MessagePatch {
                    is_read: Some(true),
                    ..MessagePatch::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.is_read);
        assert_eq!(updated.subject, "Agriculture");
        assert_eq!(repo.list().await, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = Store::seeded();
        let result = store
            .messages()
            .update(&MessageId::new("missing"), MessagePatch::default())
            .await;
        assert!(result.is_none());
    }
}
