//! Locale selection: owned controller state plus host-executed actions.
//!
//! The controller is deterministic. [`LocaleController::set_locale`]
//! mutates in-memory state and returns the side effects the host must
//! run, in order: persist the code, then re-render the document.
//! Nothing here touches storage or the DOM.

use serde::Serialize;

use crate::catalog::{StringCatalog, interpolate_first};
use crate::locale::Locale;

#[cfg(feature = "tracing")]
use tracing::{debug, trace, warn};

/// Storage key and startup fallback for the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Key of the persisted locale value in host storage.
    pub storage_key: &'static str,
    /// Locale used when no valid persisted value exists.
    pub default_locale: Locale,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            storage_key: "lang",
            default_locale: Locale::En,
        }
    }
}

/// Side effects the host executes after a successful locale switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleAction {
    /// Write `value` to persistent storage under `key`.
    Persist {
        key: &'static str,
        value: &'static str,
    },
    /// Re-run the document sweep against the live document.
    Rerender,
}

/// Locale state and message formatting for one document.
#[derive(Debug, Clone)]
pub struct LocaleController {
    catalog: StringCatalog,
    config: ControllerConfig,
    current: Locale,
}

impl LocaleController {
    /// Build a controller from the persisted storage value read at
    /// startup.
    ///
    /// A present-and-supported value wins; anything else (absent,
    /// empty, corrupt) silently falls back to the configured default.
    /// No error surfaces.
    #[must_use]
    pub fn new(
        catalog: StringCatalog,
        config: ControllerConfig,
        persisted: Option<&str>,
    ) -> Self {
        let current = persisted
            .and_then(Locale::from_code)
            .unwrap_or(config.default_locale);
        Self {
            catalog,
            config,
            current,
        }
    }

    /// The active locale.
    #[must_use]
    pub const fn current(&self) -> Locale {
        self.current
    }

    /// The controller's configuration.
    #[must_use]
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Switch the active locale.
    ///
    /// Unsupported codes are ignored: no state change, no actions, no
    /// error. A supported code updates the in-memory state and returns
    /// the persist + re-render actions for the host to execute in
    /// order.
    pub fn set_locale(&mut self, code: &str) -> Vec<LocaleAction> {
        let Some(locale) = Locale::from_code(code) else {
            #[cfg(feature = "tracing")]
            trace!(code, "ignoring unsupported locale code");
            return Vec::new();
        };
        self.current = locale;
        #[cfg(feature = "tracing")]
        debug!(locale = locale.code(), "locale switched");
        vec![
            LocaleAction::Persist {
                key: self.config.storage_key,
                value: locale.code(),
            },
            LocaleAction::Rerender,
        ]
    }

    /// Look up `key` under the active locale.
    ///
    /// Missing keys come back as the key itself: a visible, debuggable
    /// sentinel instead of a hard failure in UI code.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        match self.catalog.get(self.current, key) {
            Some(template) => template.to_owned(),
            None => {
                #[cfg(feature = "tracing")]
                warn!(key, locale = self.current.code(), "missing translation key");
                key.to_owned()
            }
        }
    }

    /// [`Self::translate`] plus `{name}` parameter interpolation: first
    /// occurrence only, in `params` order.
    #[must_use]
    pub fn format(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate_first(&self.translate(key), params)
    }
}
