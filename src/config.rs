//! Runtime configuration.
//!
//! Built with the builder methods below or read from the environment with
//! [`KizunaConfig::from_env`].
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `KIZUNA_LOCALE`, then `LANG` | UI language tag | `en` |
//! | `GEMINI_API_KEY`, then `API_KEY` | translation API key | none |
//! | `KIZUNA_TRANSLATE_MODEL` | Gemini model name | `gemini-2.5-flash` |
//! | `KIZUNA_TRANSLATE_URL` | Gemini REST base URL | Google endpoint |
//! | `KIZUNA_LOCALES_DIR` | directory overriding bundled locale files | none |
//! | `KIZUNA_SESSION_FILE` | session file path | `~/.kizuna/session.json` |
//! | `KIZUNA_UPLOAD_TICK_MS` | simulated upload tick | `250` |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::i18n::Locale;
use crate::translation::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DEFAULT_UPLOAD_TICK_MS: u64 = 250;

#[derive(Debug, Clone)]
pub struct KizunaConfig {
    pub locale: Locale,
    pub api_key: Option<String>,
    pub translate_model: String,
    pub translate_url: String,
    pub locales_dir: Option<PathBuf>,
    /// `None` uses `~/.kizuna/session.json`.
    pub session_file: Option<PathBuf>,
    pub upload_tick: Duration,
}

impl Default for KizunaConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            api_key: None,
            translate_model: DEFAULT_MODEL.to_string(),
            translate_url: DEFAULT_BASE_URL.to_string(),
            locales_dir: None,
            session_file: None,
            upload_tick: Duration::from_millis(DEFAULT_UPLOAD_TICK_MS),
        }
    }
}

impl KizunaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_translate_model(mut self, model: impl Into<String>) -> Self {
        self.translate_model = model.into();
        self
    }

    pub fn with_translate_url(mut self, url: impl Into<String>) -> Self {
        self.translate_url = url.into();
        self
    }

    pub fn with_locales_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.locales_dir = Some(dir.into());
        self
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    pub fn with_upload_tick(mut self, tick: Duration) -> Self {
        self.upload_tick = tick;
        self
    }

    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`KizunaConfig::from_env`] over an arbitrary lookup. Empty
    /// values count as unset except where noted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(tag) = get("KIZUNA_LOCALE").or_else(|| get("LANG")) {
            config.locale = Locale::from_language_tag(&tag);
        }
        config.api_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY"));
        if let Some(model) = get("KIZUNA_TRANSLATE_MODEL") {
            config.translate_model = model;
        }
        if let Some(url) = get("KIZUNA_TRANSLATE_URL") {
            config.translate_url = url.trim_end_matches('/').to_string();
        }
        config.locales_dir = get("KIZUNA_LOCALES_DIR").map(PathBuf::from);
        config.session_file = get("KIZUNA_SESSION_FILE").map(PathBuf::from);

        if let Some(raw) = lookup("KIZUNA_UPLOAD_TICK_MS") {
            config.upload_tick = parse_tick(&raw)?;
        }
        Ok(config)
    }
}

fn parse_tick(raw: &str) -> Result<Duration, ConfigError> {
    let name = "KIZUNA_UPLOAD_TICK_MS";
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { name });
    }
    match trimmed.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        }),
    }
}
