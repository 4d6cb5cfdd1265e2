//! Media selection errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why a picked file was not admitted to the composer or chat.
///
/// The `Display` strings are shown inline to the user as-is.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Please select a valid video file.")]
    NotAVideo { mime: String },

    #[error("Please select a valid image file.")]
    NotAnImage { mime: String },

    #[error("Please select an image or video file.")]
    UnsupportedMedia { mime: String },

    #[error("Video is too long. Please select a video under 5 minutes.")]
    TooLong { duration_secs: f64, max_secs: f64 },

    #[error("Could not read video metadata. The file may be corrupt.")]
    UnreadableMetadata { path: PathBuf },

    #[error("Could not open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("An upload is already in progress.")]
    UploadInProgress,
}

impl MediaError {
    pub fn error_code(&self) -> &'static str {
        match self {
            MediaError::NotAVideo { .. } => "media_not_video",
            MediaError::NotAnImage { .. } => "media_not_image",
            MediaError::UnsupportedMedia { .. } => "media_unsupported",
            MediaError::TooLong { .. } => "media_too_long",
            MediaError::UnreadableMetadata { .. } => "media_unreadable",
            MediaError::Io { .. } => "media_io",
            MediaError::UploadInProgress => "media_busy",
        }
    }
}
