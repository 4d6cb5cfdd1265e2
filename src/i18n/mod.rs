//! Interface strings in English, Chinese and Japanese.
//!
//! Bundles are flat `key -> string` JSON maps. The three built-in bundles
//! are compiled in; a locale directory with `en.json`, `zh.json` and
//! `ja.json` can override any of them at start-up. Lookups fall back to
//! the key itself.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, error, warn};

type Bundle = HashMap<String, String>;

const EN_BUNDLE: &str = include_str!("../../locales/en.json");
const ZH_BUNDLE: &str = include_str!("../../locales/zh.json");
const JA_BUNDLE: &str = include_str!("../../locales/ja.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Zh, Locale::Ja];

    /// Resolve a language tag such as `zh-CN`, `ja_JP.UTF-8` or `en`.
    /// Anything unrecognised is English.
    pub fn from_language_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Locale::Zh,
            "ja" => Locale::Ja,
            _ => Locale::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
        }
    }

    /// Next locale in `en -> zh -> ja` order.
    pub fn next(&self) -> Self {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::Ja,
            Locale::Ja => Locale::En,
        }
    }

    fn embedded(&self) -> &'static str {
        match self {
            Locale::En => EN_BUNDLE,
            Locale::Zh => ZH_BUNDLE,
            Locale::Ja => JA_BUNDLE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct I18n {
    locale: Locale,
    bundles: HashMap<Locale, Bundle>,
}

impl I18n {
    /// Built-in bundles only.
    pub fn embedded(locale: Locale) -> Self {
        let bundles = Locale::ALL
            .into_iter()
            .filter_map(|l| match serde_json::from_str::<Bundle>(l.embedded()) {
                Ok(bundle) => Some((l, bundle)),
                Err(e) => {
                    error!(locale = l.code(), error = %e, "built-in locale bundle is invalid");
                    None
                }
            })
            .collect();
        Self { locale, bundles }
    }

    /// No bundles at all; every lookup returns its key.
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            bundles: HashMap::new(),
        }
    }

    /// Built-in bundles, overridden by whatever `dir` provides. Files are
    /// read concurrently; a missing or broken file keeps the built-in one.
    pub async fn load(locale: Locale, dir: Option<&Path>) -> Self {
        let mut i18n = Self::embedded(locale);
        let Some(dir) = dir else {
            return i18n;
        };

        let (en, zh, ja) = tokio::join!(
            read_bundle(dir, Locale::En),
            read_bundle(dir, Locale::Zh),
            read_bundle(dir, Locale::Ja),
        );
        for (l, bundle) in [(Locale::En, en), (Locale::Zh, zh), (Locale::Ja, ja)] {
            if let Some(bundle) = bundle {
                i18n.bundles.entry(l).or_default().extend(bundle);
            }
        }
        i18n
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.bundles
            .get(&self.locale)
            .and_then(|bundle| bundle.get(key))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(key)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::embedded(Locale::default())
    }
}

async fn read_bundle(dir: &Path, locale: Locale) -> Option<Bundle> {
    let path = dir.join(format!("{}.json", locale.code()));
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no locale override");
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(bundle) => Some(bundle),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load translation file");
            None
        }
    }
}
