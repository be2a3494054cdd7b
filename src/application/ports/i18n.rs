// src/application/ports/i18n.rs
use std::fmt;

/// A BCP 47 language tag, normalized to `language[-REGION]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: &str) -> Self {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        match parts.next().filter(|region| !region.is_empty()) {
            Some(region) => Self(format!("{language}-{}", region.to_ascii_uppercase())),
            None => Self(language),
        }
    }

    pub fn tag(&self) -> &str {
        &self.0
    }

    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".into())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait MessageSource: Send + Sync {
    /// Looks a key up for the locale; `None` when no bundle defines it.
    fn message(&self, key: &str, locale: &Locale) -> Option<String>;

    /// Like [`MessageSource::message`] but falls back to the key itself.
    fn resolve(&self, key: &str, locale: &Locale) -> String {
        self.message(key, locale).unwrap_or_else(|| key.to_owned())
    }
}
