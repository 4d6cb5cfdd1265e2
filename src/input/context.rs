//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the application state relevant to input
//! handling so the registry can pick bindings by modal, focus and view.

use crate::app::{AuthStatus, Focus, View};

/// The type of modal currently capturing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// Session check in progress
    Loading,
    /// Account list shown while signed out
    SignIn,
    /// Go-live description modal
    LiveSetup,
    /// File path prompt
    PathPrompt,
}

#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub view: View,
    pub focus: Focus,
    pub modal: ModalType,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    pub fn with_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn is_input_focused(&self) -> bool {
        self.focus.is_input()
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    /// Modal implied by the session state, if any.
    pub fn modal_for_auth(auth: AuthStatus) -> ModalType {
        match auth {
            AuthStatus::Loading => ModalType::Loading,
            AuthStatus::Unauthenticated => ModalType::SignIn,
            AuthStatus::Authenticated => ModalType::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_context_default() {
        let ctx = InputContext::default();
        assert_eq!(ctx.view, View::Feed);
        assert_eq!(ctx.focus, Focus::Browse);
        assert_eq!(ctx.modal, ModalType::None);
        assert!(!ctx.is_input_focused());
        assert!(!ctx.is_modal_active());
    }

    #[test]
    fn test_input_context_builder() {
        let ctx = InputContext::new()
            .with_view(View::Messages)
            .with_focus(Focus::Chat)
            .with_modal(ModalType::PathPrompt);
        assert_eq!(ctx.view, View::Messages);
        assert!(ctx.is_input_focused());
        assert!(ctx.is_modal_active());
    }

    #[test]
    fn test_modal_for_auth() {
        assert_eq!(InputContext::modal_for_auth(AuthStatus::Loading), ModalType::Loading);
        assert_eq!(InputContext::modal_for_auth(AuthStatus::Unauthenticated), ModalType::SignIn);
        assert_eq!(InputContext::modal_for_auth(AuthStatus::Authenticated), ModalType::None);
    }
}
