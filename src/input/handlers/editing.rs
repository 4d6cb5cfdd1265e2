//! Text input command handlers.
//!
//! Routes editing keys to the input that owns focus and turns Enter/Esc
//! into the matching submit or cancel action.

use tracing::debug;

use crate::app::{App, Focus, PathTarget};
use crate::input::Command;
use crate::widgets::InputBox;

use super::navigation::{open_path_prompt, remove_last_image};

/// Handles commands while an input has focus.
///
/// Returns `true` if the command was handled.
pub fn handle_editing_command(app: &mut App, cmd: &Command) -> bool {
    if !app.focus.is_input() {
        return false;
    }

    if cmd.is_editing() {
        let edited = match focused_input(app) {
            Some(input) => apply_edit(input, cmd),
            None => false,
        };
        if edited && app.focus == Focus::SearchQuery {
            app.refresh_search();
        }
        return edited;
    }

    match cmd {
        Command::Submit => submit(app),
        Command::Unfocus => {
            unfocus(app);
            true
        }
        Command::NextField => match app.profile.draft_mut() {
            Some(draft) => {
                draft.focus = draft.focus.next();
                true
            }
            None => false,
        },
        Command::AttachMedia => match app.focus {
            Focus::Composer => open_path_prompt(app, PathTarget::ComposerImage),
            Focus::Chat => open_path_prompt(app, PathTarget::ChatMedia),
            Focus::ProfileForm => open_path_prompt(app, PathTarget::Avatar),
            _ => false,
        },
        Command::AttachAlternate => match app.focus {
            Focus::Composer => open_path_prompt(app, PathTarget::ComposerVideo),
            Focus::ProfileForm => open_path_prompt(app, PathTarget::Cover),
            _ => false,
        },
        Command::RemoveMedia => match app.focus {
            Focus::Composer => remove_last_image(app),
            Focus::Chat => app.conversations.remove_media(),
            _ => false,
        },
        _ => false,
    }
}

/// Apply an editing command to an input box.
pub fn apply_edit(input: &mut InputBox, cmd: &Command) -> bool {
    match cmd {
        Command::InsertChar(c) => input.insert_char(*c),
        Command::Paste(text) => input.insert_str(text),
        Command::Backspace => input.backspace(),
        Command::DeleteChar => input.delete_char(),
        Command::MoveCursorLeft => input.move_cursor_left(),
        Command::MoveCursorRight => input.move_cursor_right(),
        Command::MoveCursorHome => input.move_cursor_home(),
        Command::MoveCursorEnd => input.move_cursor_end(),
        _ => return false,
    }
    true
}

fn focused_input(app: &mut App) -> Option<&mut InputBox> {
    match app.focus {
        Focus::Browse => None,
        Focus::Composer => Some(&mut app.composer.text),
        Focus::Comment => {
            let id = app.selected_post_id()?;
            app.card_mut(&id).map(|card| &mut card.comment_draft)
        }
        Focus::EditPost => {
            let id = app.selected_post_id()?;
            app.card_mut(&id).map(|card| &mut card.edit_buffer)
        }
        Focus::Chat => Some(&mut app.conversations.draft),
        Focus::SearchQuery => Some(&mut app.search.query),
        Focus::ProfileForm => app.profile.draft_mut().map(|d| d.focused_mut()),
        Focus::LiveChat => app.broadcast.as_mut().map(|b| &mut b.chat_input),
    }
}

fn submit(app: &mut App) -> bool {
    match app.focus {
        Focus::Browse => false,
        Focus::Composer => app.submit_composer().is_some(),
        Focus::Comment => {
            let posted = app
                .selected_post_id()
                .and_then(|id| app.submit_comment(&id))
                .is_some();
            app.focus = Focus::Browse;
            posted
        }
        Focus::EditPost => match app.selected_post_id() {
            Some(id) => app.save_edit_post(&id),
            None => {
                app.focus = Focus::Browse;
                false
            }
        },
        Focus::Chat => app.send_message().is_some(),
        Focus::SearchQuery => {
            app.focus = Focus::Browse;
            true
        }
        Focus::ProfileForm => app.save_profile_edit(),
        Focus::LiveChat => app.send_live_chat(),
    }
}

fn unfocus(app: &mut App) {
    debug!(focus = ?app.focus, "leaving input");
    match app.focus {
        Focus::EditPost => match app.selected_post_id() {
            Some(id) => app.cancel_edit_post(&id),
            None => app.focus = Focus::Browse,
        },
        Focus::ProfileForm => app.cancel_profile_edit(),
        Focus::Chat => app.close_conversation(),
        _ => app.focus = Focus::Browse,
    }
}
