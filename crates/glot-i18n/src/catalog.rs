//! Two-level message catalog: locale -> message key -> template.
//!
//! # Invariants
//!
//! 1. **Runtime immutability**: a catalog is built once (builder inserts
//!    or a JSON import) and only read afterwards.
//!
//! 2. **Interpolation replaces at most one occurrence per parameter**:
//!    [`interpolate_first`] performs a single `replacen` per
//!    `(name, value)` pair, in caller order. Repeated `{name}` tokens
//!    keep their later occurrences.
//!
//! 3. **Lookup never fails**: [`StringCatalog::get`] returns `None` for
//!    missing keys; the formatter turns that into the visible
//!    key-string sentinel. Nothing here panics or errors at render
//!    time.

use std::collections::HashMap;

use crate::locale::Locale;

/// Errors from catalog construction.
#[derive(Debug, Clone)]
pub enum I18nError {
    /// A catalog document could not be parsed.
    Parse(String),
    /// A locale code in a catalog document is not a supported locale.
    UnknownLocale(String),
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "catalog parse error: {msg}"),
            Self::UnknownLocale(code) => write!(f, "unknown locale code: {code}"),
        }
    }
}

impl std::error::Error for I18nError {}

/// Message templates for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty locale string set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template for a key.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.strings.insert(key.into(), template.into());
    }

    /// Look up a template by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the locale has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all keys in this locale.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

/// Central catalog: one [`LocaleStrings`] per supported locale.
///
/// There is deliberately no fallback chain and no pluralization: a key
/// missing from the active locale renders as the key itself, and counts
/// travel through plain `{n}` parameters.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleStrings>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add strings for a locale, replacing any previous set.
    pub fn add_locale(&mut self, locale: Locale, strings: LocaleStrings) {
        self.locales.insert(locale, strings);
    }

    /// Look up a template.
    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.locales.get(&locale).and_then(|strings| strings.get(key))
    }

    /// Registered locales, in catalog order.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.locales.contains_key(locale))
            .collect()
    }

    /// All unique keys across every registered locale, sorted.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .locales
            .values()
            .flat_map(|strings| strings.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys some other locale defines that `locale` lacks, sorted.
    ///
    /// Backs the soft invariant that every locale defines the same key
    /// set. Nothing enforces it; a gap just renders as the key string.
    #[must_use]
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        self.all_keys()
            .into_iter()
            .filter(|key| self.get(locale, key).is_none())
            .collect()
    }

    /// Load a catalog from a JSON document of the form
    /// `{"en": {"key": "template", ...}, "zh": {...}}`.
    ///
    /// Locale codes resolve leniently ([`Locale::parse`]); a code that
    /// resolves to no supported locale is an error rather than a silent
    /// drop.
    pub fn from_json(doc: &str) -> Result<Self, I18nError> {
        let raw: HashMap<String, HashMap<String, String>> =
            serde_json::from_str(doc).map_err(|e| I18nError::Parse(e.to_string()))?;

        let mut catalog = Self::new();
        for (code, entries) in raw {
            let locale =
                Locale::parse(&code).ok_or_else(|| I18nError::UnknownLocale(code.clone()))?;
            let mut strings = LocaleStrings::new();
            for (key, template) in entries {
                strings.insert(key, template);
            }
            catalog.add_locale(locale, strings);
        }
        Ok(catalog)
    }
}

/// First-occurrence `{name}` interpolation.
///
/// Each `(name, value)` pair, in slice order, replaces the first
/// occurrence of `{name}` still present in the text. Later occurrences
/// of a repeated placeholder stay verbatim, as do placeholders with no
/// matching parameter.
#[must_use]
pub fn interpolate_first(template: &str, params: &[(&str, &str)]) -> String {
    let mut text = template.to_owned();
    for &(name, value) in params {
        let token = format!("{{{name}}}");
        text = text.replacen(&token, value, 1);
    }
    text
}
