//! Unified error type for the client.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::media::MediaError;
use super::session::SessionError;
use super::translation::TranslationError;

/// Every fallible operation in the crate ends up here.
#[derive(Debug, Error)]
pub enum KizunaError {
    #[error(transparent)]
    Media(#[from] MediaError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A referenced entity does not exist (post, conversation, user).
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
}

impl KizunaError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        KizunaError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            KizunaError::Media(MediaError::Io { .. }) => ErrorCategory::System,
            KizunaError::Media(_) => ErrorCategory::Validation,
            KizunaError::Translation(TranslationError::MissingApiKey) => {
                ErrorCategory::Configuration
            }
            KizunaError::Translation(_) => ErrorCategory::External,
            KizunaError::Session(_) => ErrorCategory::System,
            KizunaError::Config(_) => ErrorCategory::Configuration,
            KizunaError::NotFound { .. } => ErrorCategory::NotFound,
        }
    }

    /// Text suitable for an inline message next to the failing control.
    pub fn user_message(&self) -> String {
        match self {
            KizunaError::Media(err) => err.to_string(),
            KizunaError::Translation(_) => "Translation failed.".to_string(),
            KizunaError::Session(_) => "Could not save your session.".to_string(),
            KizunaError::Config(err) => err.to_string(),
            KizunaError::NotFound { kind, .. } => format!("That {} no longer exists.", kind),
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            KizunaError::Media(err) => err.error_code(),
            KizunaError::Translation(err) => err.error_code(),
            KizunaError::Session(err) => err.error_code(),
            KizunaError::Config(err) => err.error_code(),
            KizunaError::NotFound { .. } => "not_found",
        }
    }
}
