//! Scriptable translator for tests and offline runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::TranslationError;
use crate::translation::{TargetLanguage, Translator};

/// A call made to the mock, for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatorCall {
    Translate { text: String, target: TargetLanguage },
    Interpret { text: String },
}

/// Translator that answers from a table.
///
/// Unknown text is echoed back as `[Target] text` for translations and as
/// `(JP): text (CN): text` for interpretations.
#[derive(Debug, Clone, Default)]
pub struct MockTranslator {
    translations: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<TranslatorCall>>>,
    fail: Arc<Mutex<bool>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let translator = Self::default();
        translator.set_failing(true);
        translator
    }

    pub fn set_translation(&self, text: &str, translated: &str) {
        self.translations
            .lock()
            .unwrap()
            .insert(text.to_string(), translated.to_string());
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Hold every answer for `delay` before returning.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<TranslatorCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: TranslatorCall, fallback: String) -> Result<String, TranslationError> {
        let key = match &call {
            TranslatorCall::Translate { text, .. } | TranslatorCall::Interpret { text } => text.clone(),
        };
        self.calls.lock().unwrap().push(call);

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if *self.fail.lock().unwrap() {
            return Err(TranslationError::Status {
                status: 500,
                message: "mock failure".to_string(),
            });
        }
        let mapped = self.translations.lock().unwrap().get(&key).cloned();
        Ok(mapped.unwrap_or(fallback))
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target: TargetLanguage) -> Result<String, TranslationError> {
        let call = TranslatorCall::Translate {
            text: text.to_string(),
            target,
        };
        self.answer(call, format!("[{}] {}", target, text)).await
    }

    async fn interpret(&self, text: &str) -> Result<String, TranslationError> {
        let call = TranslatorCall::Interpret {
            text: text.to_string(),
        };
        self.answer(call, format!("(JP): {} (CN): {}", text, text)).await
    }
}
