//! Contact-form messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use diverse_capital_core::MessageId;

use super::merge_fields;

/// An inbound message from the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub is_read: bool,
}

/// Contact form submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    /// Defaults to the time the message is stored.
    pub date: Option<DateTime<Utc>>,
    /// Defaults to unread.
    pub is_read: Option<bool>,
}

impl NewMessage {
    /// Turn the submission into a stored message.
    #[must_use]
    pub fn into_message(self, id: MessageId, now: DateTime<Utc>) -> Message {
        Message {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            date: self.date.unwrap_or(now),
            is_read: self.is_read.unwrap_or(false),
        }
    }
}

/// Partial message update; in practice the inbox toggles `isRead`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MessagePatch {
    /// Accepted so clients can send a full record back; never applied.
    pub id: Option<MessageId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub is_read: Option<bool>,
}

impl MessagePatch {
    /// Overwrite the provided fields on `message`.
    pub fn apply_to(self, message: &mut Message) {
        merge_fields!(self => message;
            name,
            email,
            subject,
            message,
            date,
            is_read,
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_form_defaults() {
        let now = Utc::now();
        let new: NewMessage = serde_json::from_value(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "subject": "Gold",
            "message": "Tell me more"
        }))
        .unwrap();

        let message = new.into_message(MessageId::new("m1"), now);
        assert_eq!(message.date, now);
        assert!(!message.is_read);
        assert_eq!(message.subject, "Gold");
    }

    #[test]
    fn test_mark_read() {
        let mut message = NewMessage::default().into_message(MessageId::new("m1"), Utc::now());
        let patch: MessagePatch = serde_json::from_value(json!({ "isRead": true })).unwrap();
        patch.apply_to(&mut message);
        assert!(message.is_read);
        assert_eq!(message.id.as_str(), "m1");
    }
}
