// src/infrastructure/i18n.rs
use crate::application::ports::i18n::{Locale, MessageSource};
use std::collections::HashMap;

const BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../../resources/messages_en.json")),
    ("it", include_str!("../../resources/messages_it.json")),
];

/// Message bundles compiled into the binary, one JSON object per language.
///
/// Lookup order: the exact tag (`it-IT`), then its language (`it`), then the
/// default locale. A key missing everywhere yields `None`.
pub struct BundledMessageCatalog {
    bundles: HashMap<String, HashMap<String, String>>,
    default_locale: Locale,
}

impl BundledMessageCatalog {
    pub fn new(default_locale: Locale) -> Result<Self, serde_json::Error> {
        let bundles = BUNDLES
            .iter()
            .map(|(tag, raw)| Ok(((*tag).to_string(), serde_json::from_str(raw)?)))
            .collect::<Result<_, serde_json::Error>>()?;
        Ok(Self {
            bundles,
            default_locale,
        })
    }

    pub fn supports(&self, locale: &Locale) -> bool {
        self.bundles.contains_key(locale.tag()) || self.bundles.contains_key(locale.language())
    }

    fn lookup(&self, tag: &str, key: &str) -> Option<String> {
        self.bundles.get(tag).and_then(|bundle| bundle.get(key)).cloned()
    }
}

impl MessageSource for BundledMessageCatalog {
    fn message(&self, key: &str, locale: &Locale) -> Option<String> {
        self.lookup(locale.tag(), key)
            .or_else(|| self.lookup(locale.language(), key))
            .or_else(|| self.lookup(self.default_locale.tag(), key))
            .or_else(|| self.lookup(self.default_locale.language(), key))
    }
}
