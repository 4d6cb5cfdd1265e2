//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects.

use crate::app::NavTarget;

/// Every action a key can trigger.
///
/// Commands are organized into categories:
/// - Global commands (quit, locale, navigation)
/// - List navigation shared by every view
/// - Post card and composer actions on the feed
/// - View-specific actions (network, profile, live)
/// - Text editing for whichever input has focus
/// - Modal commands (sign-in list, go-live modal, path prompt)
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, q)
    Quit,
    /// Jump to a navigation-bar destination (1-5)
    Navigate(NavTarget),
    /// Cycle en -> zh -> ja (Ctrl+L)
    CycleLocale,
    /// Sign out (Shift+O)
    Logout,

    // =========================================================================
    // List Navigation
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Close the open item, or return to the feed (Esc)
    Back,
    /// Open or toggle the highlighted item (Enter)
    Activate,
    /// Next tab or section (Tab)
    NextTab,

    // =========================================================================
    // Feed: Composer
    // =========================================================================
    FocusComposer,
    /// Prompt for an image path
    PickImage,
    /// Prompt for a video path
    PickVideo,
    /// Drop the last attached image
    RemoveImage,
    /// Open the go-live modal
    StartLive,

    // =========================================================================
    // Post Card
    // =========================================================================
    ToggleLike,
    Share,
    FocusComment,
    TranslatePost,
    NextComment,
    PrevComment,
    TranslateComment,
    ShowOriginal,
    EditPost,
    DeletePost,
    TogglePostMenu,
    TogglePlayback,
    ViewAuthor,
    FollowAuthor,

    // =========================================================================
    // View-specific
    // =========================================================================
    CycleSort,
    FollowSelected,
    EditProfile,
    FocusSearch,
    FocusLiveChat,
    EndLive,

    // =========================================================================
    // Input/Editing Commands
    // =========================================================================
    InsertChar(char),
    Backspace,
    DeleteChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    /// Submit the focused input (Enter)
    Submit,
    /// Leave the focused input (Esc)
    Unfocus,
    Paste(String),
    /// Next profile form field (Tab)
    NextField,
    /// Attach a file to the focused input (Ctrl+A)
    AttachMedia,
    /// Attach a video or cover image (Ctrl+O)
    AttachAlternate,
    /// Remove the attachment (Ctrl+X)
    RemoveMedia,

    // =========================================================================
    // Modal Commands
    // =========================================================================
    ConfirmModal,
    CancelModal,
    /// Sign in as the highlighted account
    SignIn,

    Noop,
}

impl Command {
    /// Returns true if the command changes visible state.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// Returns true if the command edits text.
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::Backspace
                | Command::DeleteChar
                | Command::MoveCursorLeft
                | Command::MoveCursorRight
                | Command::MoveCursorHome
                | Command::MoveCursorEnd
                | Command::Paste(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_marks_dirty() {
        assert!(Command::InsertChar('a').marks_dirty());
        assert!(Command::Quit.marks_dirty());
        assert!(!Command::Noop.marks_dirty());
    }

    #[test]
    fn test_command_is_quit() {
        assert!(Command::Quit.is_quit());
        assert!(!Command::Logout.is_quit());
    }

    #[test]
    fn test_editing_commands() {
        assert!(Command::Paste("x".into()).is_editing());
        assert!(Command::Backspace.is_editing());
        assert!(!Command::Submit.is_editing());
        assert!(!Command::ToggleLike.is_editing());
    }
}
