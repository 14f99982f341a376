//! Host-independent render orchestration shared by the wasm exports.

use glot_dom::{DocumentPatch, FlaggedElement, plan_document};
use glot_i18n::LocaleController;

/// Plan the full-document sweep for the controller's active locale.
///
/// The bulk pass resolves keys without parameters; call sites needing
/// runtime values (counts, filenames) format individually through
/// [`LocaleController::format`].
#[must_use]
pub fn plan_sweep(controller: &LocaleController, flagged: &[FlaggedElement]) -> DocumentPatch {
    plan_document(flagged, controller.current().code(), |key| {
        controller.translate(key)
    })
}
