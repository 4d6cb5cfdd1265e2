//! Translation collaborator errors.

use thiserror::Error;

use crate::traits::HttpError;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Http(#[from] HttpError),

    #[error("translation service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode translation response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("translation response contained no text")]
    EmptyResponse,

    #[error("no API key configured for the translation service")]
    MissingApiKey,
}

impl TranslationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TranslationError::Http(_) => "translate_http",
            TranslationError::Status { .. } => "translate_status",
            TranslationError::Decode(_) => "translate_decode",
            TranslationError::EmptyResponse => "translate_empty",
            TranslationError::MissingApiKey => "translate_no_key",
        }
    }
}
