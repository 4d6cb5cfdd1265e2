//! Session collaborator errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not determine a home directory for the session file")]
    NoHomeDirectory,

    #[error("session file {path} could not be read or written: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SessionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::NoHomeDirectory => "session_no_home",
            SessionError::Io { .. } => "session_io",
            SessionError::Serialization(_) => "session_json",
        }
    }
}
