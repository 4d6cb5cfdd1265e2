//! Direct-message inbox and chat window.

use std::cmp::Reverse;

use tracing::debug;

use crate::media::MediaHandle;
use crate::models::{Conversation, DirectMessage, MessageMedia};
use crate::widgets::InputBox;

#[derive(Debug, Default)]
pub struct Conversations {
    me: String,
    list: Vec<Conversation>,
    selected: Option<String>,
    cursor: usize,
    pub draft: InputBox,
    draft_media: Option<MediaHandle>,
}

impl Conversations {
    pub fn new(me: impl Into<String>, conversations: Vec<Conversation>) -> Self {
        let mut inbox = Self {
            me: me.into(),
            list: conversations,
            ..Self::default()
        };
        inbox.sort();
        inbox
    }

    /// Newest activity first. Stable, so ties keep their order.
    fn sort(&mut self) {
        self.list.sort_by_key(|c| Reverse(c.last_activity()));
    }

    pub fn list(&self) -> &[Conversation] {
        &self.list
    }

    pub fn me(&self) -> &str {
        &self.me
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.list.is_empty() {
            return;
        }
        let max = self.list.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected.as_deref()?;
        self.list.iter().find(|c| c.id == id)
    }

    pub fn total_unread(&self) -> u32 {
        self.list.iter().map(|c| c.unread_count).sum()
    }

    /// Open a conversation and mark it read. Other counters are untouched.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(index) = self.list.iter().position(|c| c.id == id) else {
            return false;
        };
        if self.selected.as_deref() != Some(id) {
            self.draft.clear();
            self.draft_media = None;
        }
        self.list[index].unread_count = 0;
        self.selected = Some(id.to_string());
        self.cursor = index;
        true
    }

    pub fn select_at_cursor(&mut self) -> bool {
        match self.list.get(self.cursor).map(|c| c.id.clone()) {
            Some(id) => self.select(&id),
            None => false,
        }
    }

    /// Back to the list. Any attached media is released.
    pub fn close(&mut self) {
        self.selected = None;
        self.draft.clear();
        self.draft_media = None;
    }

    pub fn draft_media(&self) -> Option<&MediaHandle> {
        self.draft_media.as_ref()
    }

    /// Attach a file to the next message, releasing any previous one.
    pub fn attach_media(&mut self, handle: MediaHandle) {
        self.draft_media = Some(handle);
    }

    pub fn remove_media(&mut self) -> bool {
        self.draft_media.take().is_some()
    }

    /// Append a message from `me` to the open conversation and move it to
    /// the front. Blank text with no media is refused.
    pub fn send(&mut self) -> Option<String> {
        let id = self.selected.clone()?;
        let text = self.draft.content().trim().to_string();
        if text.is_empty() && self.draft_media.is_none() {
            return None;
        }

        let media = self.draft_media.take().map(|handle| MessageMedia {
            kind: handle.kind(),
            url: format!(
                "https://picsum.photos/seed/new{}/400/300",
                chrono::Utc::now().timestamp_millis()
            ),
        });
        let message = DirectMessage::new(self.me.clone(), text, media);
        let message_id = message.id.clone();

        let conversation = self.list.iter_mut().find(|c| c.id == id)?;
        conversation.messages.push(message);
        self.draft.clear();
        self.sort();
        self.cursor = self.list.iter().position(|c| c.id == id).unwrap_or(0);
        debug!(conversation = %id, message = %message_id, "message sent");
        Some(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaRegistry;
    use crate::models::MediaKind;
    use crate::seed;

    fn inbox() -> Conversations {
        Conversations::new("u2", seed::conversations())
    }

    #[test]
    fn test_sorted_newest_first() {
        let inbox = inbox();
        let times: Vec<i64> = inbox.list().iter().map(|c| c.last_activity()).collect();
        let mut sorted = times.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(times, sorted);
    }

    #[test]
    fn test_empty_conversation_sorts_last() {
        let mut convs = seed::conversations();
        convs[0].messages.clear();
        let empty_id = convs[0].id.clone();
        let inbox = Conversations::new("u2", convs);
        assert_eq!(inbox.list().last().unwrap().id, empty_id);
    }

    #[test]
    fn test_select_zeroes_only_that_counter() {
        let mut inbox = inbox();
        let before: Vec<(String, u32)> = inbox
            .list()
            .iter()
            .map(|c| (c.id.clone(), c.unread_count))
            .collect();

        assert!(inbox.select("conv1"));
        for (id, unread) in before {
            let now = inbox.list().iter().find(|c| c.id == id).unwrap().unread_count;
            if id == "conv1" {
                assert_eq!(now, 0);
            } else {
                assert_eq!(now, unread);
            }
        }
        assert!(!inbox.select("missing"));
        assert_eq!(inbox.selected_id(), Some("conv1"));
    }

    #[test]
    fn test_send_appends_and_moves_first() {
        let mut inbox = inbox();
        let last = inbox.list().last().unwrap().id.clone();
        let count = inbox.list().last().unwrap().messages.len();

        inbox.select(&last);
        inbox.draft.set_content("  hi there ");
        let message_id = inbox.send().unwrap();

        let first = &inbox.list()[0];
        assert_eq!(first.id, last);
        assert_eq!(first.messages.len(), count + 1);
        let sent = first.last_message().unwrap();
        assert_eq!(sent.id, message_id);
        assert_eq!(sent.text, "hi there");
        assert_eq!(sent.sender_id, "u2");
        assert!(inbox.draft.is_empty());
        assert_eq!(inbox.cursor(), 0);
    }

    #[test]
    fn test_blank_send_refused() {
        let mut inbox = inbox();
        assert!(inbox.send().is_none());
        inbox.select("conv2");
        inbox.draft.set_content("   ");
        let count = inbox.selected().unwrap().messages.len();
        assert!(inbox.send().is_none());
        assert_eq!(inbox.selected().unwrap().messages.len(), count);
    }

    #[test]
    fn test_media_only_message_and_release() {
        let registry = MediaRegistry::new();
        let mut inbox = inbox();
        inbox.select("conv2");

        inbox.attach_media(registry.acquire("/tmp/a.png", MediaKind::Image));
        inbox.attach_media(registry.acquire("/tmp/b.png", MediaKind::Image));
        assert_eq!(registry.live_count(), 1);

        inbox.send().unwrap();
        assert_eq!(registry.live_count(), 0);
        let sent = inbox.selected().unwrap().last_message().unwrap();
        assert_eq!(sent.preview(), "Photo");
        assert!(sent.media.as_ref().unwrap().url.starts_with("https://"));

        inbox.attach_media(registry.acquire("/tmp/c.mp4", MediaKind::Video));
        inbox.close();
        assert_eq!(registry.live_count(), 0);
        assert!(inbox.selected().is_none());
    }
}
