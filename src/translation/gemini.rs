//! Gemini `generateContent` REST client.

use serde::{Deserialize, Serialize};
use tracing::debug;

use async_trait::async_trait;

use super::{interpretation_prompt, translation_prompt, TargetLanguage, Translator};
use crate::error::TranslationError;
use crate::traits::{Headers, HttpClient};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text.trim().to_string())
        }
    }
}

/// [`Translator`] backed by Gemini through any [`HttpClient`].
pub struct GeminiTranslator<C: HttpClient> {
    client: C,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl<C: HttpClient> GeminiTranslator<C> {
    pub fn new(client: C, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(&self, prompt: &str) -> Result<String, TranslationError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(TranslationError::MissingApiKey)?;

        let body = serde_json::to_string(&GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        })?;

        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("x-goog-api-key".to_string(), api_key.to_string());

        let response = self.client.post(&self.endpoint(), &body, &headers).await?;
        if !response.is_success() {
            return Err(TranslationError::Status {
                status: response.status,
                message: response.text_lossy(),
            });
        }

        let parsed: GenerateResponse = response.json()?;
        let text = parsed.text().ok_or(TranslationError::EmptyResponse)?;
        debug!(model = %self.model, chars = text.chars().count(), "generateContent ok");
        Ok(text)
    }
}

#[async_trait]
impl<C: HttpClient> Translator for GeminiTranslator<C> {
    async fn translate(&self, text: &str, target: TargetLanguage) -> Result<String, TranslationError> {
        debug!(target = %target, "translating text");
        self.generate(&translation_prompt(text, target)).await
    }

    async fn interpret(&self, text: &str) -> Result<String, TranslationError> {
        debug!("interpreting live chat line");
        self.generate(&interpretation_prompt(text)).await
    }
}
