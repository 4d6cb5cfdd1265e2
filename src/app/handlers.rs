//! Message handling for the App.

use tracing::debug;

use super::{App, AppMessage};

impl App {
    /// Apply an async completion. Messages for posts, comments, uploads or
    /// chat lines that no longer exist are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::SessionChecked { user } => self.apply_session_check(user),

            AppMessage::VideoProbed {
                probe_id,
                path,
                result,
            } => self.apply_video_probe(&probe_id, path, result),

            AppMessage::UploadProgress {
                upload_id,
                progress,
            } => {
                if !self.composer.apply_progress(&upload_id, progress) {
                    debug!(upload = %upload_id, progress, "stale upload progress ignored");
                }
            }

            AppMessage::PostTranslated { post_id, result } => match self.cards.get_mut(&post_id) {
                Some(card) => card.finish_translation(result),
                None => debug!(post = %post_id, "translation for removed post ignored"),
            },

            AppMessage::CommentTranslated {
                post_id,
                comment_id,
                result,
            } => {
                if !self
                    .store
                    .finish_comment_translation(&post_id, &comment_id, result)
                {
                    debug!(post = %post_id, comment = %comment_id, "translation for removed comment ignored");
                }
            }

            AppMessage::ChatInterpreted {
                post_id,
                line_id,
                text,
            } => {
                if let Some(broadcast) = self
                    .broadcast
                    .as_mut()
                    .filter(|b| b.post_id() == post_id)
                {
                    broadcast.attach_interpretation(&line_id, text);
                }
            }

            AppMessage::LiveTick { post_id } => {
                if let Some(broadcast) = self
                    .broadcast
                    .as_mut()
                    .filter(|b| b.post_id() == post_id)
                {
                    broadcast.tick();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::MockTranslator;

    fn app() -> App {
        App::with_translator(Arc::new(MockTranslator::new()))
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut app = app();
        let before = app.store.posts().to_vec();
        app.handle_message(AppMessage::PostTranslated {
            post_id: "gone".into(),
            result: Some("x".into()),
        });
        app.handle_message(AppMessage::CommentTranslated {
            post_id: "p1".into(),
            comment_id: "gone".into(),
            result: Some("x".into()),
        });
        app.handle_message(AppMessage::UploadProgress {
            upload_id: "gone".into(),
            progress: 50,
        });
        app.handle_message(AppMessage::ChatInterpreted {
            post_id: "gone".into(),
            line_id: "x".into(),
            text: "x".into(),
        });
        app.handle_message(AppMessage::LiveTick {
            post_id: "gone".into(),
        });
        assert_eq!(app.store.posts(), &before[..]);
        assert!(app.cards.is_empty());
        assert!(app.composer.video().is_none());
    }

    #[test]
    fn test_messages_mark_dirty() {
        let mut app = app();
        app.needs_redraw = false;
        app.handle_message(AppMessage::LiveTick {
            post_id: "p1".into(),
        });
        assert!(app.needs_redraw);
    }
}
