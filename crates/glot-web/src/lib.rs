#![forbid(unsafe_code)]

//! WASM boundary for Glot.
//!
//! Everything browser-shaped lives here: reading the live document into
//! `glot-dom` snapshots, executing planned patches through web-sys,
//! persisting the locale in `localStorage`, and the JS-facing exports
//! (`setLanguage`, `t`, `applyTranslations`). Planning and locale logic
//! stay in `glot-dom` / `glot-i18n`, which never touch the DOM — the
//! host-independent orchestration in [`sweep`] is shared with native
//! tests.

pub mod sweep;

#[cfg(target_arch = "wasm32")]
mod apply;
#[cfg(target_arch = "wasm32")]
mod snapshot;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{apply_translations, set_language, t};
