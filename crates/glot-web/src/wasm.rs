//! JS-facing exports.
//!
//! The controller lives in a thread-local (wasm is single-threaded);
//! it stays an owned value, the thread-local is boundary plumbing only.
//! Exports mirror the names surrounding application code calls:
//! `setLanguage(code)`, `t(key, params)`, `applyTranslations()`.

use std::cell::RefCell;

use glot_i18n::{ControllerConfig, LocaleAction, LocaleController, builtin_catalog};
use js_sys::{Array, Object};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::apply::{apply_patch, sync_lang_select};
use crate::snapshot::snapshot_flagged;
use crate::storage::{read_persisted, write_persisted};
use crate::sweep::plan_sweep;

thread_local! {
    static CONTROLLER: RefCell<LocaleController> = RefCell::new(init_controller());
}

fn init_controller() -> LocaleController {
    let config = ControllerConfig::default();
    let persisted = read_persisted(config.storage_key);
    LocaleController::new(builtin_catalog(), config, persisted.as_deref())
}

/// Rewrite every flagged element to the active locale and point the
/// locale-selection control at it. Idempotent; safe to call after any
/// DOM update that adds flagged elements.
#[wasm_bindgen(js_name = applyTranslations)]
pub fn apply_translations() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    CONTROLLER.with(|controller| {
        let controller = controller.borrow();
        let flagged = snapshot_flagged(&document);
        let shapes: Vec<_> = flagged.iter().map(|(_, f)| f.clone()).collect();
        let plan = plan_sweep(&controller, &shapes);
        for element_patch in &plan.elements {
            let (element, _) = &flagged[element_patch.element_index];
            apply_patch(&document, element, &element_patch.patch);
        }
        sync_lang_select(&document, &plan.select_value);
    });
}

/// Switch the active locale, persist it, and re-render the document.
/// Unsupported codes are silently ignored.
#[wasm_bindgen(js_name = setLanguage)]
pub fn set_language(code: &str) {
    let actions = CONTROLLER.with(|controller| controller.borrow_mut().set_locale(code));
    for action in actions {
        match action {
            LocaleAction::Persist { key, value } => write_persisted(key, value),
            LocaleAction::Rerender => apply_translations(),
        }
    }
}

/// Format a message under the active locale.
///
/// `params` is a plain JS object; entries substitute `{name}`
/// placeholders in insertion order, first occurrence only. Missing keys
/// come back as the key itself.
#[wasm_bindgen]
pub fn t(key: &str, params: JsValue) -> String {
    let entries = object_entries(&params);
    let pairs: Vec<(&str, &str)> = entries
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    CONTROLLER.with(|controller| controller.borrow().format(key, &pairs))
}

/// One initial sweep once the module is instantiated; the host page
/// loads the module after the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    apply_translations();
}

/// `Object.entries` in insertion order, values coerced to strings the
/// way template substitution expects.
fn object_entries(value: &JsValue) -> Vec<(String, String)> {
    let Some(object) = value.dyn_ref::<Object>() else {
        return Vec::new();
    };
    let mut pairs = Vec::new();
    for entry in Object::entries(object).iter() {
        let entry = Array::from(&entry);
        let Some(name) = entry.get(0).as_string() else {
            continue;
        };
        pairs.push((name, stringify(&entry.get(1))));
    }
    pairs
}

fn stringify(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(n) = value.as_f64() {
        // Integral numbers print the way JS coerces them: no ".0".
        if n.is_finite() && n.fract() == 0.0 && n.abs() < 9e15 {
            return format!("{}", n as i64);
        }
        return format!("{n}");
    }
    if let Some(b) = value.as_bool() {
        return b.to_string();
    }
    String::new()
}
