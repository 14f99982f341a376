#![forbid(unsafe_code)]

//! Internationalization core for Glot.
//!
//! Provides the static translation catalog, the `{name}` message
//! formatter, and the locale controller that drives persistence and
//! re-rendering through host-executed actions.
//!
//! # Role in Glot
//! This crate is the deterministic center: it never touches the DOM,
//! browser storage, or JS values. `glot-dom` plans document mutations
//! against snapshots, and `glot-web` is the only crate that talks to
//! the browser.

pub mod catalog;
pub mod controller;
pub mod locale;
pub mod messages;

pub use catalog::{I18nError, LocaleStrings, StringCatalog, interpolate_first};
pub use controller::{ControllerConfig, LocaleAction, LocaleController};
pub use locale::Locale;
pub use messages::builtin_catalog;
