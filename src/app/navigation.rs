//! View routing and list selection.

use tracing::debug;

use crate::models::User;
use crate::state::SearchSection;

use super::{App, Focus, NavTarget, View};

impl App {
    /// Switch pages. `Me` opens the current user's profile; every other
    /// target clears the viewed profile.
    pub fn navigate(&mut self, target: NavTarget) {
        if self.view == View::LiveBroadcaster {
            return;
        }
        self.focus = Focus::Browse;
        self.comment_cursor = None;
        match target {
            NavTarget::Me => {
                let me = self.current_user.id.clone();
                self.show_profile(me);
            }
            other => {
                self.viewed_profile = None;
                self.profile.clear();
                self.view = match other {
                    NavTarget::Feed => View::Feed,
                    NavTarget::Network => View::Network,
                    NavTarget::Messages => View::Messages,
                    NavTarget::Search => View::Search,
                    NavTarget::Me => View::Profile,
                };
                if self.view == View::Search {
                    self.focus = Focus::SearchQuery;
                }
            }
        }
        debug!(view = ?self.view, "navigated");
    }

    /// Open a user's profile. Unknown ids fall back to the current user.
    pub fn view_profile(&mut self, user_id: &str) {
        if self.view == View::LiveBroadcaster {
            return;
        }
        let id = match self.user(user_id) {
            Some(user) => user.id,
            None => {
                debug!(user = %user_id, "unknown profile, showing current user");
                self.current_user.id.clone()
            }
        };
        self.focus = Focus::Browse;
        self.show_profile(id);
    }

    fn show_profile(&mut self, user_id: String) {
        self.profile.show(&user_id, &self.current_user.id);
        self.viewed_profile = Some(user_id);
        self.view = View::Profile;
    }

    /// User on display in the profile view.
    pub fn profile_user(&self) -> User {
        self.viewed_profile
            .as_deref()
            .and_then(|id| self.user(id))
            .unwrap_or_else(|| self.current_user.clone())
    }

    /// Esc in browse mode: close whatever is open, else go back to the feed.
    pub fn go_back(&mut self) {
        match self.view {
            View::Messages if self.conversations.selected_id().is_some() => {
                self.conversations.close();
            }
            View::Feed => {
                self.comment_cursor = None;
                if let Some(id) = self.selected_post_id() {
                    if let Some(card) = self.cards.get_mut(&id) {
                        card.menu_open = false;
                    }
                }
            }
            View::LiveBroadcaster => {}
            _ => self.navigate(NavTarget::Feed),
        }
    }

    /// Post under the cursor in the current view, if any.
    pub fn selected_post_id(&self) -> Option<String> {
        match self.view {
            View::Feed => self.store.posts().get(self.feed_cursor).map(|p| p.id.clone()),
            View::Profile => {
                let user = self.viewed_profile.as_deref()?;
                self.profile
                    .posts(&self.store, user)
                    .get(self.profile.cursor)
                    .map(|p| p.id.clone())
            }
            View::Search if self.search.section == SearchSection::Posts => {
                self.search.results().posts.get(self.search.cursor).cloned()
            }
            View::LiveBroadcaster => self.live_post_id.clone(),
            _ => None,
        }
    }

    /// Move the list cursor of the current view.
    pub fn move_selection(&mut self, delta: isize) {
        self.comment_cursor = None;
        match self.view {
            View::Feed => {
                self.feed_cursor = step(self.feed_cursor, delta, self.store.len());
            }
            View::Network => {
                let len = self.network_len();
                self.network.move_cursor(delta, len);
            }
            View::Messages => self.conversations.move_cursor(delta),
            View::Search => self.search.move_cursor(delta),
            View::Profile => {
                let len = match self.viewed_profile.as_deref() {
                    Some(user) => self.profile.posts(&self.store, user).len(),
                    None => 0,
                };
                self.profile.cursor = step(self.profile.cursor, delta, len);
            }
            View::LiveBroadcaster => {}
        }
    }

    /// Move between comments of the selected post.
    pub fn move_comment_cursor(&mut self, delta: isize) {
        let Some(count) = self
            .selected_post_id()
            .and_then(|id| self.store.get(&id))
            .map(|p| p.comments.len())
        else {
            return;
        };
        if count == 0 {
            self.comment_cursor = None;
            return;
        }
        self.comment_cursor = Some(match self.comment_cursor {
            None if delta < 0 => count - 1,
            None => 0,
            Some(current) => step(current, delta, count),
        });
    }

    pub fn selected_comment_id(&self) -> Option<String> {
        let post = self.store.get(&self.selected_post_id()?)?;
        post.comments.get(self.comment_cursor?).map(|c| c.id.clone())
    }

    pub(super) fn clamp_cursors(&mut self) {
        self.feed_cursor = step(self.feed_cursor, 0, self.store.len());
        if let Some(user) = self.viewed_profile.clone() {
            let len = self.profile.posts(&self.store, &user).len();
            self.profile.cursor = step(self.profile.cursor, 0, len);
        }
        self.comment_cursor = None;
    }
}

pub(super) fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).clamp(0, len as isize - 1) as usize
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
    fn test_me_opens_own_profile() {
        let mut app = app();
        app.navigate(NavTarget::Me);
        assert_eq!(app.view, View::Profile);
        assert_eq!(app.viewed_profile.as_deref(), Some(app.current_user.id.as_str()));
    }

    #[test]
    fn test_other_targets_clear_viewed_profile() {
        let mut app = app();
        app.view_profile("u1");
        assert_eq!(app.viewed_profile.as_deref(), Some("u1"));
        app.navigate(NavTarget::Network);
        assert_eq!(app.view, View::Network);
        assert!(app.viewed_profile.is_none());
    }

    #[test]
    fn test_unknown_profile_falls_back_to_me() {
        let mut app = app();
        app.view_profile("nobody");
        assert_eq!(app.view, View::Profile);
        assert_eq!(app.profile_user().id, app.current_user.id);
    }

    #[test]
    fn test_search_focuses_query() {
        let mut app = app();
        app.navigate(NavTarget::Search);
        assert_eq!(app.focus, Focus::SearchQuery);
    }

    #[test]
    fn test_feed_cursor_clamps() {
        let mut app = app();
        app.move_selection(-3);
        assert_eq!(app.feed_cursor, 0);
        app.move_selection(100);
        assert_eq!(app.feed_cursor, app.store.len() - 1);
    }

    #[test]
    fn test_comment_cursor() {
        let mut app = app();
        app.feed_cursor = app.store.position("p1").unwrap();
        app.move_comment_cursor(1);
        assert_eq!(app.selected_comment_id().as_deref(), Some("c1"));
        app.move_comment_cursor(1);
        assert_eq!(app.selected_comment_id().as_deref(), Some("c2"));
        app.move_comment_cursor(1);
        assert_eq!(app.selected_comment_id().as_deref(), Some("c2"));
        app.move_selection(1);
        assert!(app.selected_comment_id().is_none());
    }

    #[test]
    fn test_back_from_messages_goes_to_feed() {
        let mut app = app();
        app.navigate(NavTarget::Messages);
        app.conversations.select_at_cursor();
        app.go_back();
        assert_eq!(app.view, View::Messages);
        assert!(app.conversations.selected_id().is_none());
        app.go_back();
        assert_eq!(app.view, View::Feed);
    }
}
