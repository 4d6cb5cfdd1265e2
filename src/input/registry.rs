//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on the current
//! application context. It handles:
//! - Global bindings (always active)
//! - Modal bindings (loading, sign-in, go-live, path prompt)
//! - Focus bindings for whichever input is being edited
//! - Browse bindings per view

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
///
/// Priority order:
/// 1. Ctrl+C always quits
/// 2. Modal bindings (a modal swallows everything it does not bind)
/// 3. Global bindings
/// 4. Focus and editing bindings when an input has focus, otherwise view
///    and browse bindings
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::from_event(&key);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        if context.is_modal_active() {
            return self.dispatch_modal(key, context);
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if context.is_input_focused() {
            self.dispatch_input(key, context)
        } else {
            self.config.get_browse(context.view, &combo).cloned()
        }
    }

    fn dispatch_modal(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::from_event(&key);

        match context.modal {
            ModalType::Loading | ModalType::SignIn => {
                // Locale switching stays available on the sign-in screen
                if let Some(cmd) = self.config.get_modal(context.modal, &combo) {
                    return Some(cmd.clone());
                }
                if let Some(cmd) = self.config.get_global(&combo) {
                    return Some(cmd.clone());
                }
                Some(Command::Noop)
            }

            ModalType::LiveSetup | ModalType::PathPrompt => {
                if let Some(cmd) = self.config.get_modal(context.modal, &combo) {
                    return Some(cmd.clone());
                }
                if let Some(cmd) = self.config.get_input_editing(&combo) {
                    return Some(cmd.clone());
                }
                if let Some(c) = printable(&key) {
                    return Some(Command::InsertChar(c));
                }
                Some(Command::Noop)
            }

            ModalType::None => None,
        }
    }

    fn dispatch_input(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::from_event(&key);

        if let Some(cmd) = self.config.get_focus(context.focus, &combo) {
            return Some(cmd.clone());
        }

        if let Some(cmd) = self.config.get_input_editing(&combo) {
            return Some(cmd.clone());
        }

        printable(&key).map(Command::InsertChar)
    }
}

/// Character for a key press with no modifier beyond Shift.
fn printable(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(c)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Focus, NavTarget, View};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        for ctx in [
            InputContext::new(),
            InputContext::new().with_modal(ModalType::PathPrompt),
            InputContext::new().with_focus(Focus::Composer),
        ] {
            assert_eq!(registry.dispatch(ctrl('c'), &ctx), Some(Command::Quit));
        }
    }

    #[test]
    fn test_browse_digits_navigate() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_view(View::Feed);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('2')), &ctx),
            Some(Command::Navigate(NavTarget::Network))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('5')), &ctx),
            Some(Command::Navigate(NavTarget::Me))
        );
    }

    #[test]
    fn test_focused_input_takes_characters() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_focus(Focus::Composer);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('q')), &ctx),
            Some(Command::InsertChar('q'))
        );
        assert_eq!(
            registry.dispatch(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT), &ctx),
            Some(Command::InsertChar('Q'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Enter), &ctx),
            Some(Command::Submit)
        );
        assert_eq!(registry.dispatch(ctrl('a'), &ctx), Some(Command::AttachMedia));
    }

    #[test]
    fn test_profile_form_tab_moves_field() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new()
            .with_view(View::Profile)
            .with_focus(Focus::ProfileForm);
        assert_eq!(
            registry.dispatch(key(KeyCode::Tab), &ctx),
            Some(Command::NextField)
        );
    }

    #[test]
    fn test_path_prompt_edits_text() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_modal(ModalType::PathPrompt);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('/')), &ctx),
            Some(Command::InsertChar('/'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Backspace), &ctx),
            Some(Command::Backspace)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Enter), &ctx),
            Some(Command::ConfirmModal)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Esc), &ctx),
            Some(Command::CancelModal)
        );
        assert_eq!(registry.dispatch(key(KeyCode::F(2)), &ctx), Some(Command::Noop));
    }

    #[test]
    fn test_sign_in_modal() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_modal(ModalType::SignIn);
        assert_eq!(
            registry.dispatch(key(KeyCode::Enter), &ctx),
            Some(Command::SignIn)
        );
        assert_eq!(
            registry.dispatch(ctrl('l'), &ctx),
            Some(Command::CycleLocale)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('5')), &ctx),
            Some(Command::Noop)
        );
    }

    #[test]
    fn test_unbound_browse_key_ignored() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_view(View::Messages);
        assert_eq!(registry.dispatch(key(KeyCode::Char('z')), &ctx), None);
    }
}
