//! Supported locales.

use serde::Serialize;

/// Locales shipped with the built-in catalog.
///
/// The set is fixed at build time; adding a locale means adding a
/// variant here and a message table in [`crate::messages`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English (startup fallback).
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

impl Locale {
    /// Every supported locale, in catalog order. The first entry is the
    /// default when no valid persisted value exists.
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    /// Exact short-code match (`"en"`, `"zh"`).
    ///
    /// This is the strict form used wherever user-controlled values
    /// flow (locale switches, persisted storage): anything that is not
    /// literally a supported code is rejected.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Lenient parse by primary language subtag.
    ///
    /// For catalog documents, whose locale keys may be region-qualified
    /// or differently cased (`"zh-CN"`, `"en_US"`, `"EN"`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_ascii_lowercase().replace('-', "_");
        let lang = lower.split('_').next()?;
        match lang {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// Short code, as persisted and as used in catalog documents.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Native display name for locale-selection controls.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
        }
    }
}
