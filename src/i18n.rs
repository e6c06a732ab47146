//! Translation lookup
//!
//! Dictionaries are nested JSON objects addressed with dotted keys
//! (`"areas.career"`). Lookup falls back from the active locale to the
//! default locale, and finally to the raw key itself.

use std::collections::BTreeMap;

use serde_json::Value;

/// Locale used when the active one lacks a key
pub const DEFAULT_LOCALE: &str = "en";

const EN: &str = include_str!("../locales/en.json");
const PT: &str = include_str!("../locales/pt.json");

/// Read-only key → text lookup handed to components that display text
pub trait Translator {
    /// Translate `key`, never failing
    fn lookup(&self, key: &str) -> String;

    /// Translate `key` and substitute `{{name}}` placeholders
    fn lookup_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        interpolate(&self.lookup(key), vars)
    }
}

/// Replace `{{name}}` placeholders with their values
pub fn interpolate(text: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(text.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{{{name}}}}}"), value)
    })
}

/// Locale dictionaries with an active language
#[derive(Debug, Clone)]
pub struct Catalog {
    locales: BTreeMap<String, Value>,
    active: String,
}

impl Catalog {
    /// Empty catalog; every lookup returns the key
    pub fn new(active: &str) -> Self {
        Self {
            locales: BTreeMap::new(),
            active: active.to_string(),
        }
    }

    /// Catalog with the bundled `en` and `pt` dictionaries
    pub fn builtin(active: &str) -> Self {
        let mut catalog = Self::new(DEFAULT_LOCALE);
        for (code, json) in [("en", EN), ("pt", PT)] {
            match serde_json::from_str::<Value>(json) {
                Ok(dict) => catalog.insert_locale(code, dict),
                Err(e) => log::error!("Bundled locale {} is unreadable: {}", code, e),
            }
        }
        if !catalog.set_language(active) {
            log::warn!("Unknown language {:?}, using {}", active, DEFAULT_LOCALE);
        }
        catalog
    }

    /// Add or replace a locale dictionary
    pub fn insert_locale(&mut self, code: &str, dictionary: Value) {
        self.locales.insert(code.to_string(), dictionary);
    }

    /// Switch the active language; returns false if it is unknown
    pub fn set_language(&mut self, code: &str) -> bool {
        if self.locales.contains_key(code) {
            self.active = code.to_string();
            true
        } else {
            false
        }
    }

    pub fn language(&self) -> &str {
        &self.active
    }

    /// Known language codes, sorted
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Pick a supported language from a browser tag such as `pt-BR`
    pub fn match_language(&self, tag: &str) -> Option<&str> {
        let primary = tag.split(['-', '_']).next()?.to_lowercase();
        self.locales
            .keys()
            .find(|code| **code == primary)
            .map(String::as_str)
    }

    fn find(&self, locale: &str, key: &str) -> Option<&str> {
        let mut node = self.locales.get(locale)?;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        node.as_str().filter(|s| !s.is_empty())
    }
}

impl Translator for Catalog {
    fn lookup(&self, key: &str) -> String {
        self.find(&self.active, key)
            .or_else(|| self.find(DEFAULT_LOCALE, key))
            .unwrap_or(key)
            .to_string()
    }
}
