//! Imperative execution of planned patches against the live document.

use glot_dom::TextPatch;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement, Node};

/// Id of the locale-selection control kept in sync after a sweep.
pub const LANG_SELECT_ID: &str = "lang-select";

/// Execute one planned patch against its element.
pub fn apply_patch(document: &Document, element: &Element, patch: &TextPatch) {
    match patch {
        TextPatch::SetPlaceholder { text } => {
            let _ = element.set_attribute("placeholder", text);
        }
        TextPatch::SetTextNode { index, text } => {
            if let Some(node) = nth_snapshot_child(element, *index) {
                node.set_node_value(Some(text));
            }
        }
        TextPatch::AppendTextNode { text } => {
            let _ = element.append_child(&document.create_text_node(text));
        }
        TextPatch::SetTextContent { text } => element.set_text_content(Some(text)),
    }
}

/// Point the locale-selection control at the active locale, if present.
///
/// Sets the value directly; no change event fires, so there is no
/// re-entrant locale-switch loop.
pub fn sync_lang_select(document: &Document, value: &str) {
    if let Some(select) = document
        .get_element_by_id(LANG_SELECT_ID)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    {
        select.set_value(value);
    }
}

/// Find the nth child node the snapshot would have recorded: text and
/// element nodes count, comments and the rest do not.
fn nth_snapshot_child(element: &Element, index: usize) -> Option<Node> {
    let child_nodes = element.child_nodes();
    let mut seen = 0usize;
    for i in 0..child_nodes.length() {
        let node = child_nodes.item(i)?;
        let ty = node.node_type();
        if ty == Node::TEXT_NODE || ty == Node::ELEMENT_NODE {
            if seen == index {
                return Some(node);
            }
            seen += 1;
        }
    }
    None
}
