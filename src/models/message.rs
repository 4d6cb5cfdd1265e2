use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MediaKind, User};

/// Media attached to a direct message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageMedia {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

/// A single direct message. Messages are never edited once sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DirectMessage {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MessageMedia>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl DirectMessage {
    pub fn new(sender_id: impl Into<String>, text: impl Into<String>, media: Option<MessageMedia>) -> Self {
        Self {
            id: format!("dm{}", Uuid::new_v4().simple()),
            sender_id: sender_id.into(),
            text: text.into(),
            media,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Short text used in the conversation list.
    pub fn preview(&self) -> &str {
        match self.media.as_ref().map(|m| m.kind) {
            Some(MediaKind::Image) => "Photo",
            Some(MediaKind::Video) => "Video",
            None => &self.text,
        }
    }
}

/// A two-party thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participants: [User; 2],
    pub messages: Vec<DirectMessage>,
    #[serde(default)]
    pub unread_count: u32,
}

impl Conversation {
    pub fn last_message(&self) -> Option<&DirectMessage> {
        self.messages.last()
    }

    /// Ordering key for the conversation list. Empty threads sort last.
    pub fn last_activity(&self) -> i64 {
        self.last_message().map(|m| m.timestamp).unwrap_or(0)
    }

    /// The participant who is not `me`, falling back to the first one.
    pub fn other_participant(&self, me: &str) -> &User {
        self.participants
            .iter()
            .find(|p| p.id != me)
            .unwrap_or(&self.participants[0])
    }
}

/// Format a message timestamp the way the conversation list shows it:
/// `HH:MM` for today, `Mon D` otherwise.
pub fn format_timestamp(timestamp_ms: i64, now: DateTime<Local>) -> String {
    let Some(date) = Local.timestamp_millis_opt(timestamp_ms).single() else {
        return String::new();
    };
    if date.date_naive() == now.date_naive() {
        date.format("%H:%M").to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}
