//! Browse-mode command handlers.
//!
//! Handles page switching, list movement and the actions bound to the
//! selected post, connection or conversation.

use tracing::debug;

use crate::app::{App, Focus, NavTarget, PathPrompt, PathTarget, View};
use crate::input::Command;

/// Handles browse-mode commands.
///
/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => {
            app.should_quit = true;
            true
        }
        Command::Navigate(target) => {
            app.navigate(*target);
            true
        }
        Command::CycleLocale => {
            let locale = app.cycle_locale();
            debug!(locale = locale.code(), "locale changed");
            true
        }
        Command::Logout => {
            app.logout();
            true
        }
        Command::MoveUp => {
            app.move_selection(-1);
            true
        }
        Command::MoveDown => {
            app.move_selection(1);
            true
        }
        Command::Back => {
            app.go_back();
            true
        }
        Command::Activate => handle_activate(app),
        Command::NextTab => handle_next_tab(app),

        Command::FocusComposer => {
            app.focus = Focus::Composer;
            true
        }
        Command::PickImage => open_path_prompt(app, PathTarget::ComposerImage),
        Command::PickVideo => open_path_prompt(app, PathTarget::ComposerVideo),
        Command::RemoveImage => remove_last_image(app),
        Command::StartLive => app.start_live_setup(),

        Command::CycleSort => app.cycle_community_sort(),
        Command::FollowSelected => app.network_follow_selected(),
        Command::EditProfile => app.begin_profile_edit(),
        Command::FocusSearch => {
            app.focus = Focus::SearchQuery;
            true
        }
        Command::FocusLiveChat => {
            if app.broadcast.is_some() {
                app.focus = Focus::LiveChat;
                true
            } else {
                false
            }
        }
        Command::EndLive => app.end_live(),

        _ => handle_post_command(app, cmd),
    }
}

/// Actions on the selected post card.
fn handle_post_command(app: &mut App, cmd: &Command) -> bool {
    let Some(post_id) = app.selected_post_id() else {
        return false;
    };

    match cmd {
        Command::ToggleLike => app.toggle_like(&post_id).is_some(),
        Command::Share => app.share(&post_id).is_some(),
        Command::FocusComment => {
            if app.card_mut(&post_id).is_some() {
                app.focus = Focus::Comment;
                true
            } else {
                false
            }
        }
        Command::TranslatePost => {
            app.translate_post(&post_id);
            true
        }
        Command::NextComment => {
            app.move_comment_cursor(1);
            true
        }
        Command::PrevComment => {
            app.move_comment_cursor(-1);
            true
        }
        Command::TranslateComment => match app.selected_comment_id() {
            Some(comment_id) => app.translate_comment(&post_id, &comment_id),
            None => false,
        },
        Command::ShowOriginal => match app.selected_comment_id() {
            Some(comment_id) => app.show_comment_original(&post_id, &comment_id),
            None => false,
        },
        Command::EditPost => app.begin_edit_post(&post_id),
        Command::DeletePost => app.delete_own_post(&post_id),
        Command::TogglePostMenu => {
            app.toggle_post_menu(&post_id);
            true
        }
        Command::TogglePlayback => app.toggle_playback(&post_id),
        Command::ViewAuthor => match app.store.get(&post_id).map(|p| p.user.id.clone()) {
            Some(author) => {
                app.view_profile(&author);
                true
            }
            None => false,
        },
        Command::FollowAuthor => {
            let author = match app.view {
                View::Profile => Some(app.profile_user().id),
                _ => app.store.get(&post_id).map(|p| p.user.id.clone()),
            };
            author.is_some_and(|id| app.toggle_follow(&id))
        }
        _ => false,
    }
}

fn handle_activate(app: &mut App) -> bool {
    match app.view {
        View::Network => app.network_activate(),
        View::Messages => app.open_conversation(),
        View::Search => app.search_activate(),
        View::Feed | View::Profile => match app.selected_post_id() {
            Some(post_id) => app.toggle_playback(&post_id),
            None => false,
        },
        View::LiveBroadcaster => false,
    }
}

fn handle_next_tab(app: &mut App) -> bool {
    match app.view {
        View::Network => {
            app.next_network_tab();
            true
        }
        View::Profile => {
            app.profile.toggle_tab();
            true
        }
        View::Search => {
            app.search.next_section();
            true
        }
        _ => false,
    }
}

/// Path prompts are refused while another modal is open.
pub fn open_path_prompt(app: &mut App, target: PathTarget) -> bool {
    if app.path_prompt.is_some() || app.live_setup.is_some() {
        return false;
    }
    app.path_prompt = Some(PathPrompt::new(target));
    true
}

pub fn remove_last_image(app: &mut App) -> bool {
    match app.composer.images().len() {
        0 => false,
        n => app.remove_composer_image(n - 1),
    }
}
