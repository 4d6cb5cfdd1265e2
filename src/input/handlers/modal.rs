//! Modal command handlers: sign-in list, go-live modal, path prompt.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::app::{App, PathTarget};
use crate::error::KizunaError;
use crate::input::{Command, ModalType};

use super::editing::apply_edit;

/// Handles commands while `modal` is open.
///
/// Returns `true` if the command was handled.
pub fn handle_modal_command(app: &mut App, cmd: &Command, modal: ModalType) -> bool {
    match modal {
        ModalType::None => false,
        ModalType::Loading => false,
        ModalType::SignIn => match cmd {
            Command::MoveUp => {
                app.move_login_cursor(-1);
                true
            }
            Command::MoveDown => {
                app.move_login_cursor(1);
                true
            }
            Command::SignIn => app.login_selected(),
            _ => false,
        },
        ModalType::LiveSetup => match cmd {
            Command::ConfirmModal => app.confirm_live_setup().is_some(),
            Command::CancelModal => {
                app.cancel_live_setup();
                true
            }
            _ => match app.live_setup.as_mut() {
                Some(setup) => apply_edit(&mut setup.description, cmd),
                None => false,
            },
        },
        ModalType::PathPrompt => match cmd {
            Command::ConfirmModal => {
                confirm_path_prompt(app);
                true
            }
            Command::CancelModal => {
                app.path_prompt = None;
                true
            }
            _ => match app.path_prompt.as_mut() {
                Some(prompt) => apply_edit(&mut prompt.input, cmd),
                None => false,
            },
        },
    }
}

/// `~/` expands to the home directory.
pub fn expand_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Some(home.join(rest));
        }
    }
    Some(PathBuf::from(raw))
}

/// Close the prompt and attach the file to its target. Failures surface as
/// the footer notice or the composer's inline error.
fn confirm_path_prompt(app: &mut App) {
    let Some(prompt) = app.path_prompt.take() else {
        return;
    };
    let Some(path) = expand_path(prompt.input.content()) else {
        return;
    };
    info!(target = ?prompt.target, path = %path.display(), "attaching file");

    let result = match prompt.target {
        PathTarget::ComposerImage => {
            // The composer shows its own inline error.
            if let Err(e) = app.attach_image(&path) {
                warn!(code = e.error_code(), "image rejected: {}", e);
            }
            return;
        }
        PathTarget::ComposerVideo => {
            app.pick_video(path);
            return;
        }
        PathTarget::ChatMedia => app.attach_chat_media(&path),
        PathTarget::Avatar | PathTarget::Cover => app.pick_profile_image(prompt.target, &path),
    };

    if let Err(e) = result {
        let err = KizunaError::from(e);
        warn!(code = err.error_code(), "attachment rejected: {}", err);
        app.set_notice(err.user_message());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::MockTranslator;
    use crate::app::{AuthStatus, Focus, PathPrompt, View};

    fn app() -> App {
        let mut app = App::with_translator(Arc::new(MockTranslator::new()));
        app.auth = AuthStatus::Authenticated;
        app
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("  "), None);
        assert_eq!(expand_path("/tmp/a.png"), Some(PathBuf::from("/tmp/a.png")));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/a.png"), Some(home.join("a.png")));
        }
    }

    #[test]
    fn test_path_prompt_cancel() {
        let mut app = app();
        app.path_prompt = Some(PathPrompt::new(PathTarget::ComposerImage));
        assert!(handle_modal_command(&mut app, &Command::InsertChar('x'), ModalType::PathPrompt));
        assert_eq!(app.path_prompt.as_ref().unwrap().input.content(), "x");
        assert!(handle_modal_command(&mut app, &Command::CancelModal, ModalType::PathPrompt));
        assert!(app.path_prompt.is_none());
    }

    #[test]
    fn test_non_image_sets_composer_error() {
        let mut app = app();
        let mut prompt = PathPrompt::new(PathTarget::ComposerImage);
        prompt.input.set_content("/tmp/notes.txt");
        app.path_prompt = Some(prompt);
        assert!(handle_modal_command(&mut app, &Command::ConfirmModal, ModalType::PathPrompt));
        assert!(app.path_prompt.is_none());
        assert!(app.composer.error().is_some());
        assert!(app.composer.images().is_empty());
    }

    #[test]
    fn test_bad_chat_media_sets_notice() {
        let mut app = app();
        let mut prompt = PathPrompt::new(PathTarget::ChatMedia);
        prompt.input.set_content("notes.txt");
        app.path_prompt = Some(prompt);
        handle_modal_command(&mut app, &Command::ConfirmModal, ModalType::PathPrompt);
        assert!(app.notice.is_some());
    }

    #[tokio::test]
    async fn test_live_setup_confirm_starts_broadcast() {
        let mut app = app();
        assert!(app.start_live_setup());
        for c in "hi".chars() {
            handle_modal_command(&mut app, &Command::InsertChar(c), ModalType::LiveSetup);
        }
        assert!(handle_modal_command(&mut app, &Command::ConfirmModal, ModalType::LiveSetup));
        assert_eq!(app.view, View::LiveBroadcaster);
        assert_eq!(app.focus, Focus::Browse);
        assert_eq!(app.store.posts()[0].content, "hi");
    }

    #[test]
    fn test_sign_in_moves_cursor() {
        let mut app = app();
        app.auth = AuthStatus::Unauthenticated;
        assert!(handle_modal_command(&mut app, &Command::MoveDown, ModalType::SignIn));
        assert_eq!(app.login_cursor, 1);
    }
}
