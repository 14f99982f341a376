//! Live-document snapshots for the planner.

use glot_dom::{ChildNode, ElementKind, ElementShape, FlaggedElement};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

/// Attribute that flags an element for translation.
pub const I18N_ATTR: &str = "data-i18n";

/// Collect every flagged element with the shape snapshot the planner
/// needs, in document order.
pub fn snapshot_flagged(document: &Document) -> Vec<(Element, FlaggedElement)> {
    let mut flagged = Vec::new();
    let Ok(nodes) = document.query_selector_all(&format!("[{I18N_ATTR}]")) else {
        return flagged;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        let Some(key) = element.get_attribute(I18N_ATTR) else {
            continue;
        };
        let shape = element_shape(&element);
        flagged.push((element, FlaggedElement { key, shape }));
    }
    flagged
}

fn element_shape(element: &Element) -> ElementShape {
    let kind = match element.tag_name().to_ascii_uppercase().as_str() {
        "INPUT" => ElementKind::TextInput,
        "TEXTAREA" => ElementKind::TextArea,
        _ => ElementKind::Other,
    };

    // Text and element children only; comments and the rest are
    // invisible to the planner, and the applier counts the same way.
    let mut children = Vec::new();
    let child_nodes = element.child_nodes();
    for i in 0..child_nodes.length() {
        let Some(node) = child_nodes.item(i) else {
            continue;
        };
        match node.node_type() {
            Node::TEXT_NODE => {
                children.push(ChildNode::Text(node.node_value().unwrap_or_default()));
            }
            Node::ELEMENT_NODE => children.push(ChildNode::Element),
            _ => {}
        }
    }

    ElementShape {
        kind,
        has_placeholder: element.has_attribute("placeholder"),
        children,
    }
}
