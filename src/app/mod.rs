//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`View`] - Which page is currently displayed
//! - [`Focus`] - Which input receives typed characters
//! - [`AuthStatus`] - Session gate in front of every view
//! - [`AppMessage`] - Messages for async communication
//!
//! All state lives on the UI task. Background work (video probing, the
//! upload ticker, translation, session writes) is spawned with
//! `tokio::spawn` and reports back through `message_tx`.

mod composer;
mod handlers;
mod live;
mod messages;
mod messaging;
mod navigation;
mod network;
mod posts;
mod profile;
mod search;
mod session;
mod types;

pub use composer::spawn_upload_ticker;
pub use messages::AppMessage;
pub use types::{AuthStatus, Focus, NavTarget, PathPrompt, PathTarget, View};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapters::InMemorySession;
use crate::config::KizunaConfig;
use crate::i18n::I18n;
use crate::media::MediaRegistry;
use crate::models::User;
use crate::seed;
use crate::state::{
    Broadcast, CardState, Composer, Conversations, LiveSetup, NetworkState, ProfileState,
    SearchState,
};
use crate::store::{FollowSet, PostStore};
use crate::tasks::{TaskGuard, TaskSet};
use crate::traits::SessionProvider;
use crate::translation::Translator;

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    pub auth: AuthStatus,
    pub view: View,
    pub focus: Focus,
    /// Canonical post list; engagement counters live here.
    pub store: PostStore,
    pub follows: FollowSet,
    pub current_user: User,
    /// Profile id shown by [`View::Profile`].
    pub viewed_profile: Option<String>,
    /// Open "go live" modal.
    pub live_setup: Option<LiveSetup>,
    /// Post currently broadcasting.
    pub live_post_id: Option<String>,
    pub broadcast: Option<Broadcast>,
    live_clock: Option<TaskGuard>,
    /// Per-post UI state, keyed by post id.
    pub cards: HashMap<String, CardState>,
    pub feed_cursor: usize,
    /// Selected comment within the selected post.
    pub comment_cursor: Option<usize>,
    pub composer: Composer,
    pending_probe: Option<(String, TaskGuard)>,
    pub conversations: Conversations,
    pub network: NetworkState,
    pub profile: ProfileState,
    pub search: SearchState,
    pub path_prompt: Option<PathPrompt>,
    /// Highlighted account on the sign-in screen.
    pub login_cursor: usize,
    /// One-line status shown in the footer until the next action.
    pub notice: Option<String>,
    pub i18n: I18n,
    pub config: KizunaConfig,
    pub media: MediaRegistry,
    translator: Arc<dyn Translator>,
    session: Arc<dyn SessionProvider>,
    /// In-flight translations, owned by post id.
    tasks: TaskSet,
    /// Receiver for async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    pub tick_count: u64,
}

impl App {
    pub fn new(
        config: KizunaConfig,
        translator: Arc<dyn Translator>,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let current_user = seed::user(seed::DEFAULT_USER_ID).unwrap_or_else(|| seed::users()[0].clone());

        Self {
            should_quit: false,
            auth: AuthStatus::Loading,
            view: View::Feed,
            focus: Focus::Browse,
            store: PostStore::seeded(),
            follows: FollowSet::new(current_user.id.clone(), seed::INITIAL_FOLLOWS.iter().copied()),
            conversations: Conversations::new(current_user.id.clone(), seed::conversations()),
            current_user,
            viewed_profile: None,
            live_setup: None,
            live_post_id: None,
            broadcast: None,
            live_clock: None,
            cards: HashMap::new(),
            feed_cursor: 0,
            comment_cursor: None,
            composer: Composer::new(),
            pending_probe: None,
            network: NetworkState::default(),
            profile: ProfileState::default(),
            search: SearchState::default(),
            path_prompt: None,
            login_cursor: 0,
            notice: None,
            i18n: I18n::embedded(config.locale),
            config,
            media: MediaRegistry::new(),
            translator,
            session,
            tasks: TaskSet::new(),
            message_rx: Some(message_rx),
            message_tx,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    /// App over seed data with an in-memory session and the given
    /// translator.
    pub fn with_translator(translator: Arc<dyn Translator>) -> Self {
        Self::new(KizunaConfig::default(), translator, Arc::new(InMemorySession::new()))
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Translated UI string.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.i18n.t(key)
    }

    /// Seed users with the current user's edited profile in place.
    pub fn known_users(&self) -> Vec<User> {
        seed::users()
            .into_iter()
            .map(|u| {
                if u.id == self.current_user.id {
                    self.current_user.clone()
                } else {
                    u
                }
            })
            .collect()
    }

    pub fn user(&self, user_id: &str) -> Option<User> {
        if user_id == self.current_user.id {
            Some(self.current_user.clone())
        } else {
            seed::user(user_id)
        }
    }

    pub fn is_live(&self) -> bool {
        self.live_post_id.is_some()
    }

    /// Card state for a post, created on first use.
    pub fn card_mut(&mut self, post_id: &str) -> Option<&mut CardState> {
        let post = self.store.get(post_id)?;
        Some(
            self.cards
                .entry(post_id.to_string())
                .or_insert_with(|| CardState::new(post)),
        )
    }

    pub fn card(&self, post_id: &str) -> Option<&CardState> {
        self.cards.get(post_id)
    }

    /// In-flight background tasks owned by `owner`.
    pub fn running_tasks(&self, owner: &str) -> usize {
        self.tasks.running(owner)
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Something on screen is animated by the tick counter: the loading
    /// spinner, a probe, an upload or an in-flight translation.
    pub fn is_animating(&self) -> bool {
        self.auth == AuthStatus::Loading
            || self.is_probing()
            || self.composer.is_uploading()
            || self.tasks.any_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockTranslator;

    fn app() -> App {
        App::with_translator(Arc::new(MockTranslator::new()))
    }

    #[test]
    fn test_app_starts_loading_on_feed() {
        let app = app();
        assert_eq!(app.auth, AuthStatus::Loading);
        assert_eq!(app.view, View::Feed);
        assert_eq!(app.focus, Focus::Browse);
        assert_eq!(app.current_user.id, seed::DEFAULT_USER_ID);
        assert!(app.follows.contains("u1"));
    }

    #[test]
    fn test_known_users_reflect_profile_edits() {
        let mut app = app();
        app.current_user.name = "李伟".into();
        let me = app
            .known_users()
            .into_iter()
            .find(|u| u.id == app.current_user.id)
            .unwrap();
        assert_eq!(me.name, "李伟");
        assert_eq!(app.user(&app.current_user.id.clone()).unwrap().name, "李伟");
    }

    #[test]
    fn test_card_created_lazily() {
        let mut app = app();
        assert!(app.card("p1").is_none());
        assert!(app.card_mut("p1").is_some());
        assert!(app.card("p1").is_some());
        assert!(app.card_mut("missing").is_none());
    }
}
