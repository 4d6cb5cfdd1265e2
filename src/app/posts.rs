//! Feed operations: posting, editing, engagement and translation.

use tracing::{debug, error, info};

use crate::models::PostDraft;
use crate::state::TranslateAction;
use crate::translation::TargetLanguage;

use super::{App, AppMessage, Focus};

impl App {
    /// Prepend a post by the current user. Returns its id.
    pub fn add_post(&mut self, draft: PostDraft) -> String {
        let id = self.store.add(&self.current_user, draft);
        if let Some(post) = self.store.get(&id) {
            self.cards
                .insert(id.clone(), crate::state::CardState::new(post));
        }
        self.feed_cursor = 0;
        self.comment_cursor = None;
        info!(post = %id, "post created");
        id
    }

    /// Replace a post's text. Any cached translation is dropped.
    pub fn update_post(&mut self, post_id: &str, content: &str) -> bool {
        if !self.store.update_content(post_id, content) {
            return false;
        }
        if let Some(card) = self.cards.get_mut(post_id) {
            card.content_changed();
        }
        true
    }

    /// Remove a post, its card state and any translation still in flight.
    pub fn delete_post(&mut self, post_id: &str) -> bool {
        let Some(post) = self.store.remove(post_id) else {
            return false;
        };
        for media in &post.media {
            self.media.release(&media.url);
        }
        self.cards.remove(post_id);
        let aborted = self.tasks.cancel(post_id);
        self.search.retain_posts(|id| id != post_id);
        self.clamp_cursors();
        if self.focus == Focus::EditPost || self.focus == Focus::Comment {
            self.focus = Focus::Browse;
        }
        info!(post = %post_id, aborted, "post deleted");
        true
    }

    pub fn toggle_like(&mut self, post_id: &str) -> Option<u32> {
        let (liked, likes) = self.store.toggle_like(post_id)?;
        debug!(post = %post_id, liked, likes, "like toggled");
        Some(likes)
    }

    pub fn share(&mut self, post_id: &str) -> Option<u32> {
        self.store.share(post_id)
    }

    /// Post the card's comment draft as the current user.
    pub fn submit_comment(&mut self, post_id: &str) -> Option<String> {
        let text = self.cards.get(post_id)?.comment_draft.content().to_string();
        let comment_id = self.store.add_comment(post_id, &self.current_user, &text)?;
        if let Some(card) = self.cards.get_mut(post_id) {
            card.comment_draft.clear();
        }
        Some(comment_id)
    }

    pub fn toggle_post_menu(&mut self, post_id: &str) {
        let viewer = self.current_user.id.clone();
        let Some(post) = self.store.get(post_id).cloned() else {
            return;
        };
        if let Some(card) = self.card_mut(post_id) {
            card.toggle_menu(&post, &viewer);
        }
    }

    /// Author-only.
    pub fn begin_edit_post(&mut self, post_id: &str) -> bool {
        let viewer = self.current_user.id.clone();
        let Some(post) = self.store.get(post_id).cloned() else {
            return false;
        };
        let started = self
            .card_mut(post_id)
            .is_some_and(|card| card.begin_edit(&post, &viewer));
        if started {
            self.focus = Focus::EditPost;
        }
        started
    }

    /// Write the trimmed edit buffer back when it changed.
    pub fn save_edit_post(&mut self, post_id: &str) -> bool {
        let Some(post) = self.store.get(post_id).cloned() else {
            return false;
        };
        self.focus = Focus::Browse;
        let changed = self
            .cards
            .get_mut(post_id)
            .and_then(|card| card.save_edit(&post));
        match changed {
            Some(content) => self.update_post(post_id, &content),
            None => false,
        }
    }

    pub fn cancel_edit_post(&mut self, post_id: &str) {
        if let Some(post) = self.store.get(post_id).cloned() {
            if let Some(card) = self.cards.get_mut(post_id) {
                card.cancel_edit(&post);
            }
        }
        self.focus = Focus::Browse;
    }

    /// Author-only delete from the card menu.
    pub fn delete_own_post(&mut self, post_id: &str) -> bool {
        let owned = self
            .store
            .get(post_id)
            .is_some_and(|p| p.user.id == self.current_user.id);
        owned && self.delete_post(post_id)
    }

    pub fn toggle_playback(&mut self, post_id: &str) -> bool {
        let playable = self.store.get(post_id).is_some_and(|p| p.is_media_post() && !p.is_live());
        match self.card_mut(post_id) {
            Some(card) if playable => {
                card.playing = !card.playing;
                true
            }
            _ => false,
        }
    }

    /// Translate the whole post, or toggle an existing translation.
    pub fn translate_post(&mut self, post_id: &str) -> TranslateAction {
        let Some(content) = self.store.get(post_id).map(|p| p.content.clone()) else {
            return TranslateAction::Busy;
        };
        let Some(card) = self.card_mut(post_id) else {
            return TranslateAction::Busy;
        };
        let action = card.request_translation();
        if action != TranslateAction::Start {
            return action;
        }

        let translator = self.translator.clone();
        let tx = self.message_tx.clone();
        let owner = post_id.to_string();
        self.tasks.spawn(post_id, async move {
            let target = TargetLanguage::detect_for(&content);
            let result = match translator.translate(&content, target).await {
                Ok(text) => Some(text),
                Err(e) => {
                    error!(post = %owner, error = %e, code = e.error_code(), "Error translating text");
                    None
                }
            };
            let _ = tx.send(AppMessage::PostTranslated {
                post_id: owner,
                result,
            });
        });
        action
    }

    /// Translate one comment. Refused while that comment is already in
    /// flight or already translated.
    pub fn translate_comment(&mut self, post_id: &str, comment_id: &str) -> bool {
        let Some(text) = self.store.begin_comment_translation(post_id, comment_id) else {
            return false;
        };
        let translator = self.translator.clone();
        let tx = self.message_tx.clone();
        let (post, comment) = (post_id.to_string(), comment_id.to_string());
        self.tasks.spawn(post_id, async move {
            let target = TargetLanguage::detect_for(&text);
            let result = match translator.translate(&text, target).await {
                Ok(translated) => Some(translated),
                Err(e) => {
                    error!(post = %post, comment = %comment, error = %e, "Error translating text");
                    None
                }
            };
            let _ = tx.send(AppMessage::CommentTranslated {
                post_id: post,
                comment_id: comment,
                result,
            });
        });
        true
    }

    pub fn show_comment_original(&mut self, post_id: &str, comment_id: &str) -> bool {
        self.store.show_comment_original(post_id, comment_id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::adapters::MockTranslator;
    use crate::models::{Media, MediaKind, PostType, JUST_NOW};

    fn app() -> App {
        App::with_translator(Arc::new(MockTranslator::new()))
    }

    async fn pump(app: &mut App) {
        let mut rx = app.message_rx.take().unwrap();
        let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        app.handle_message(msg);
        app.message_rx = Some(rx);
    }

    #[test]
    fn test_add_post_prepends_with_unique_id() {
        let mut app = app();
        let before = app.store.len();
        let existing: HashSet<String> = app.store.posts().iter().map(|p| p.id.clone()).collect();
        let id = app.add_post(PostDraft::text("こんにちは"));
        assert_eq!(app.store.len(), before + 1);
        assert_eq!(app.store.posts()[0].id, id);
        assert_eq!(app.store.posts()[0].created_at, JUST_NOW);
        assert_eq!(app.store.posts()[0].post_type, PostType::Text);
        assert!(!existing.contains(&id));
    }

    #[test]
    fn test_like_twice_restores_count() {
        let mut app = app();
        let original = app.store.get("p1").unwrap().likes;
        assert_eq!(app.toggle_like("p1"), Some(original + 1));
        assert_eq!(app.toggle_like("p1"), Some(original));
        let post = app.store.get("p1").unwrap();
        assert_eq!(post.likes, original);
        assert!(!post.liked);
    }

    #[test]
    fn test_edit_is_author_only_and_trimmed() {
        let mut app = app();
        let foreign = app
            .store
            .posts()
            .iter()
            .find(|p| p.user.id != app.current_user.id)
            .unwrap()
            .id
            .clone();
        assert!(!app.begin_edit_post(&foreign));
        assert!(!app.delete_own_post(&foreign));

        let mine = app.add_post(PostDraft::text("draft"));
        assert!(app.begin_edit_post(&mine));
        assert_eq!(app.focus, Focus::EditPost);
        app.card_mut(&mine).unwrap().edit_buffer.set_content("  final  ");
        assert!(app.save_edit_post(&mine));
        assert_eq!(app.store.get(&mine).unwrap().content, "final");

        app.begin_edit_post(&mine);
        app.card_mut(&mine).unwrap().edit_buffer.set_content(" final ");
        assert!(!app.save_edit_post(&mine));
    }

    #[test]
    fn test_comment_blank_rejected() {
        let mut app = app();
        let before = app.store.get("p1").unwrap().comments.len();
        app.card_mut("p1").unwrap().comment_draft.set_content("   ");
        assert!(app.submit_comment("p1").is_none());
        app.card_mut("p1").unwrap().comment_draft.set_content("良いですね");
        assert!(app.submit_comment("p1").is_some());
        let post = app.store.get("p1").unwrap();
        assert_eq!(post.comments.len(), before + 1);
        assert_eq!(post.comments.last().unwrap().user.id, app.current_user.id);
        assert!(app.card("p1").unwrap().comment_draft.is_empty());
    }

    #[tokio::test]
    async fn test_translate_post_then_toggle() {
        let translator = Arc::new(MockTranslator::new());
        let mut app = App::with_translator(translator.clone());
        let content = app.store.get("p1").unwrap().content.clone();
        translator.set_translation(&content, "translated");

        assert_eq!(app.translate_post("p1"), TranslateAction::Start);
        assert_eq!(app.translate_post("p1"), TranslateAction::Busy);
        pump(&mut app).await;

        let card = app.card("p1").unwrap();
        assert_eq!(card.visible_translation(), Some("translated"));
        assert_eq!(app.translate_post("p1"), TranslateAction::Toggled);
        assert!(app.card("p1").unwrap().visible_translation().is_none());
        assert_eq!(translator.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_translation_rolls_back() {
        let mut app = App::with_translator(Arc::new(MockTranslator::failing()));
        assert_eq!(app.translate_post("p1"), TranslateAction::Start);
        pump(&mut app).await;
        let card = app.card("p1").unwrap();
        assert!(!card.translating);
        assert!(card.translated.is_none());
        assert_eq!(app.translate_post("p1"), TranslateAction::Start);
    }

    #[tokio::test]
    async fn test_comment_translation_and_original() {
        let mut app = app();
        assert!(app.translate_comment("p1", "c1"));
        assert!(!app.translate_comment("p1", "c1"));
        pump(&mut app).await;
        let comment = app.store.get("p1").unwrap().comment("c1").unwrap().clone();
        assert!(comment.translation.is_some());
        assert!(!comment.is_translating);

        assert!(app.show_comment_original("p1", "c1"));
        let comment = app.store.get("p1").unwrap().comment("c1").unwrap();
        assert!(comment.translation.is_none());
    }

    #[tokio::test]
    async fn test_delete_aborts_translation() {
        let translator = Arc::new(MockTranslator::new());
        translator.set_delay(Duration::from_secs(30));
        let mut app = App::with_translator(translator);
        app.translate_post("p1");
        assert_eq!(app.running_tasks("p1"), 1);
        assert!(app.delete_post("p1"));
        assert_eq!(app.running_tasks("p1"), 0);
        assert!(app.card("p1").is_none());
        assert!(app.store.get("p1").is_none());
    }

    #[test]
    fn test_delete_releases_committed_media() {
        let mut app = app();
        let urls: Vec<String> = ["/tmp/a.png", "/tmp/b.png"]
            .into_iter()
            .map(|path| app.media.acquire(path, MediaKind::Image).commit())
            .collect();
        let id = app.add_post(PostDraft {
            content: "two shots".into(),
            post_type: PostType::Image,
            media: urls.iter().map(Media::image).collect(),
        });
        assert_eq!(app.media.live_count(), 2);

        assert!(app.delete_post(&id));
        assert!(urls.iter().all(|url| !app.media.is_live(url)));
        assert_eq!(app.media.released_count(), 2);
    }
}
