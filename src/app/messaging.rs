//! Direct-message actions.

use std::path::Path;

use tracing::warn;

use crate::error::MediaError;
use crate::media::mime_for_path;
use crate::models::MediaKind;

use super::{App, Focus};

impl App {
    /// Open the highlighted conversation and move focus to its input.
    pub fn open_conversation(&mut self) -> bool {
        let opened = self.conversations.select_at_cursor();
        if opened {
            self.focus = Focus::Chat;
        }
        opened
    }

    pub fn send_message(&mut self) -> Option<String> {
        self.conversations.send()
    }

    /// Attach an image or video to the next chat message.
    pub fn attach_chat_media(&mut self, path: &Path) -> Result<(), MediaError> {
        let kind = match mime_for_path(path) {
            Some(mime) if mime.starts_with("image/") => MediaKind::Image,
            Some(mime) if mime.starts_with("video/") => MediaKind::Video,
            other => {
                let err = MediaError::UnsupportedMedia {
                    mime: other.unwrap_or("application/octet-stream").to_string(),
                };
                warn!(path = %path.display(), "chat attachment rejected");
                return Err(err);
            }
        };
        let handle = self.media.acquire(path, kind);
        self.conversations.attach_media(handle);
        Ok(())
    }

    pub fn close_conversation(&mut self) {
        self.conversations.close();
        self.focus = Focus::Browse;
    }
}
