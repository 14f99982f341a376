//! Locale persistence over `localStorage`.
//!
//! Storage can be absent or locked down (privacy modes). Reads then
//! behave as if nothing were persisted and writes are dropped; the
//! in-memory controller state carries the session. No error reaches
//! the UI either way.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted locale code, if any.
#[must_use]
pub fn read_persisted(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Persist the locale code.
pub fn write_persisted(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}
