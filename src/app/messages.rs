//! AppMessage enum for async communication within the application.

use std::path::PathBuf;

use crate::error::MediaError;
use crate::media::VideoInfo;
use crate::models::User;

/// Completions reported by background tasks. Every variant is matched back
/// to its target by id; a target that has gone away turns the message into
/// a no-op.
#[derive(Debug)]
pub enum AppMessage {
    /// Stored session looked up at startup. `None` shows the sign-in list.
    SessionChecked { user: Option<User> },
    /// A picked video finished probing.
    VideoProbed {
        probe_id: String,
        path: PathBuf,
        result: Result<VideoInfo, MediaError>,
    },
    /// Simulated upload ticker report.
    UploadProgress { upload_id: String, progress: u8 },
    /// Whole-post translation finished; `None` means it failed.
    PostTranslated {
        post_id: String,
        result: Option<String>,
    },
    CommentTranslated {
        post_id: String,
        comment_id: String,
        result: Option<String>,
    },
    /// Live-chat interpretation, already folded into the sentinel on failure.
    ChatInterpreted {
        post_id: String,
        line_id: String,
        text: String,
    },
    /// One second of broadcast time elapsed.
    LiveTick { post_id: String },
}
