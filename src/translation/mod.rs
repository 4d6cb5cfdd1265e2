//! Translation client.
//!
//! Posts, comments and live-chat lines are translated between Chinese and
//! Japanese by an external text-generation model. The core methods are
//! fallible; [`Translator::translate_text`] and
//! [`Translator::live_interpretation`] collapse failures into the sentinel
//! strings the UI shows.

mod gemini;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::error;

use crate::error::TranslationError;

pub use gemini::{GeminiTranslator, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const TRANSLATION_FAILED: &str = "Translation failed.";
pub const INTERPRETATION_FAILED: &str = "Interpretation failed.";

/// Kanji, hiragana or katakana (including the long vowel mark).
static CJK_SCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[一-龠]+|[ぁ-ゔ]+|[ァ-ヴー]+").expect("valid CJK regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    Japanese,
    Chinese,
}

impl TargetLanguage {
    /// Text already written in CJK script goes to Chinese, anything else to
    /// Japanese.
    pub fn detect_for(text: &str) -> Self {
        if CJK_SCRIPT.is_match(text) {
            TargetLanguage::Chinese
        } else {
            TargetLanguage::Japanese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::Japanese => "Japanese",
            TargetLanguage::Chinese => "Chinese",
        }
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn translation_prompt(text: &str, target: TargetLanguage) -> String {
    format!("Translate the following text to {}: \"{}\"", target, text)
}

pub fn interpretation_prompt(text: &str) -> String {
    format!(
        "You are a simultaneous interpreter for a live chat. If the following text is in \
         Chinese, translate it to Japanese and prefix with (JP):. If it is in Japanese, \
         translate it to Chinese and prefix with (CN):. If it's in another language like \
         English, translate to both, like (JP): [Japanese translation] (CN): [Chinese \
         translation]. Keep the translation natural and concise for a live chat. Text: \"{}\"",
        text
    )
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: TargetLanguage) -> Result<String, TranslationError>;

    /// Bilingual `(JP): … (CN): …` rendering of a live-chat line.
    async fn interpret(&self, text: &str) -> Result<String, TranslationError>;

    async fn translate_text(&self, text: &str, target: TargetLanguage) -> String {
        match self.translate(text, target).await {
            Ok(translated) => translated,
            Err(e) => {
                error!(error = %e, code = e.error_code(), "Error translating text");
                TRANSLATION_FAILED.to_string()
            }
        }
    }

    async fn live_interpretation(&self, text: &str) -> String {
        match self.interpret(text).await {
            Ok(interpreted) => interpreted,
            Err(e) => {
                error!(error = %e, code = e.error_code(), "Error getting live interpretation");
                INTERPRETATION_FAILED.to_string()
            }
        }
    }
}
