//! Type definitions for the application state.
//!
//! - [`View`] - which page is on screen
//! - [`NavTarget`] - bottom-bar destinations
//! - [`Focus`] - which control receives typed characters
//! - [`AuthStatus`] - session gate
//! - [`PathPrompt`] - the "pick a file" prompt standing in for a file dialog

use crate::widgets::InputBox;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Feed,
    Network,
    Messages,
    Search,
    Profile,
    LiveBroadcaster,
}

/// Destinations reachable from the navigation bar. `Me` resolves to the
/// current user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Feed,
    Network,
    Messages,
    Search,
    Me,
}

impl NavTarget {
    pub const ALL: [NavTarget; 5] = [
        NavTarget::Feed,
        NavTarget::Network,
        NavTarget::Messages,
        NavTarget::Search,
        NavTarget::Me,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            NavTarget::Feed => "nav.feed",
            NavTarget::Network => "nav.network",
            NavTarget::Messages => "nav.messages",
            NavTarget::Search => "nav.search",
            NavTarget::Me => "nav.me",
        }
    }

    pub fn is_active(&self, view: View) -> bool {
        matches!(
            (self, view),
            (NavTarget::Feed, View::Feed)
                | (NavTarget::Network, View::Network)
                | (NavTarget::Messages, View::Messages)
                | (NavTarget::Search, View::Search)
                | (NavTarget::Me, View::Profile)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// Keys move selections and trigger actions.
    #[default]
    Browse,
    Composer,
    Comment,
    EditPost,
    Chat,
    SearchQuery,
    ProfileForm,
    LiveChat,
}

impl Focus {
    pub fn is_input(&self) -> bool {
        *self != Focus::Browse
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated,
}

/// What a confirmed path prompt attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTarget {
    ComposerImage,
    ComposerVideo,
    ChatMedia,
    Avatar,
    Cover,
}

impl PathTarget {
    pub fn label_key(&self) -> &'static str {
        match self {
            PathTarget::ComposerImage => "composer.pick_image",
            PathTarget::ComposerVideo => "composer.pick_video",
            PathTarget::ChatMedia => "messages.pick_media",
            PathTarget::Avatar => "profile.avatar",
            PathTarget::Cover => "profile.cover",
        }
    }
}

#[derive(Debug)]
pub struct PathPrompt {
    pub target: PathTarget,
    pub input: InputBox,
}

impl PathPrompt {
    pub fn new(target: PathTarget) -> Self {
        Self {
            target,
            input: InputBox::new(),
        }
    }
}
