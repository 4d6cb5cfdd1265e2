//! Session gate: startup check, sign-in and sign-out.

use tracing::{debug, error, info};

use crate::i18n::Locale;
use crate::models::User;
use crate::seed;
use crate::state::{Composer, Conversations, ProfileState, SearchState};
use crate::store::FollowSet;

use super::{App, AppMessage, AuthStatus, Focus, View};

impl App {
    /// Ask the session collaborator for a stored user. The answer arrives
    /// as [`AppMessage::SessionChecked`].
    pub fn check_session(&mut self) {
        self.auth = AuthStatus::Loading;
        let session = self.session.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let user = match session.check_session().await {
                Ok(user) => user,
                Err(e) => {
                    error!(error = %e, code = e.error_code(), "session check failed");
                    None
                }
            };
            let _ = tx.send(AppMessage::SessionChecked { user });
        });
    }

    pub(super) fn apply_session_check(&mut self, user: Option<User>) {
        match user {
            Some(user) => self.enter_session(user),
            None => {
                self.auth = AuthStatus::Unauthenticated;
                self.login_cursor = 0;
            }
        }
    }

    /// Sign in as `user` and persist the choice.
    pub fn login(&mut self, user: User) {
        let session = self.session.clone();
        let stored = user.clone();
        tokio::spawn(async move {
            if let Err(e) = session.login(&stored).await {
                error!(error = %e, code = e.error_code(), "could not store session");
            }
        });
        self.enter_session(user);
    }

    /// Sign in as the account highlighted on the sign-in screen.
    pub fn login_selected(&mut self) -> bool {
        match seed::users().into_iter().nth(self.login_cursor) {
            Some(user) => {
                self.login(user);
                true
            }
            None => false,
        }
    }

    pub fn move_login_cursor(&mut self, delta: isize) {
        let len = seed::users().len();
        if len > 0 {
            self.login_cursor =
                (self.login_cursor as isize + delta).clamp(0, len as isize - 1) as usize;
        }
    }

    fn enter_session(&mut self, user: User) {
        info!(user = %user.id, "signed in");
        if user.id != self.current_user.id {
            self.follows = FollowSet::new(user.id.clone(), seed::INITIAL_FOLLOWS.iter().copied());
            self.conversations = Conversations::new(user.id.clone(), seed::conversations());
            let cleared = self.store.clear_likes();
            debug!(cleared, "previous viewer's likes withdrawn");
        }
        self.store.refresh_author(&user);
        self.current_user = user;
        self.auth = AuthStatus::Authenticated;
        self.view = View::Feed;
        self.focus = Focus::Browse;
    }

    /// Drop the session and every per-session draft.
    pub fn logout(&mut self) {
        let session = self.session.clone();
        tokio::spawn(async move {
            if let Err(e) = session.logout().await {
                error!(error = %e, code = e.error_code(), "could not clear session");
            }
        });
        if self.is_live() {
            self.end_live();
        }
        self.tasks.cancel_all();
        self.pending_probe = None;
        self.composer = Composer::new();
        self.cards.clear();
        self.profile = ProfileState::default();
        self.search = SearchState::default();
        self.conversations.close();
        self.live_setup = None;
        self.path_prompt = None;
        self.viewed_profile = None;
        self.view = View::Feed;
        self.focus = Focus::Browse;
        self.auth = AuthStatus::Unauthenticated;
        self.login_cursor = 0;
        info!("signed out");
    }

    pub fn cycle_locale(&mut self) -> Locale {
        let next = self.i18n.locale().next();
        self.i18n.set_locale(next);
        next
    }
}
