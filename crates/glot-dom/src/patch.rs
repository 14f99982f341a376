//! Text-patch planning: from element shapes to the operations the
//! boundary executes against the live document.
//!
//! # Invariants
//!
//! 1. **Siblings survive**: a plan never removes or reorders element
//!    children; it rewrites or appends text nodes only.
//!
//! 2. **Idempotent sweeps**: planning a document already in the target
//!    state yields patches whose application leaves the text
//!    byte-identical. [`retext_children`] is the executable model of
//!    that claim.
//!
//! 3. **No parameters in bulk passes**: [`plan_document`] resolves keys
//!    without parameters. Call sites with runtime values (counts,
//!    filenames) format individually through the controller.

use serde::Serialize;

use crate::node::{ChildNode, ElementShape, FlaggedElement};
use crate::strategy::{RenderStrategy, select_strategy};

#[cfg(feature = "tracing")]
use tracing::trace;

/// One mutation against a flagged element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPatch {
    /// Set the `placeholder` attribute.
    SetPlaceholder { text: String },
    /// Set the content of the direct child node at `index` (counting
    /// snapshotted nodes only).
    SetTextNode { index: usize, text: String },
    /// Append a new trailing text node.
    AppendTextNode { text: String },
    /// Replace the element's entire text content.
    SetTextContent { text: String },
}

/// A patch bound to its element's position in the flagged-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementPatch {
    /// Index into the flagged-element list handed to [`plan_document`].
    pub element_index: usize,
    /// The mutation to execute.
    pub patch: TextPatch,
}

/// A planned sweep over every flagged element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentPatch {
    /// Patches in document order. Elements whose strategy plans nothing
    /// are absent.
    pub elements: Vec<ElementPatch>,
    /// Value the locale-selection control should show afterwards,
    /// applied only if the control exists in the document.
    pub select_value: String,
}

/// Leading space before text that shares an element with icon markup.
fn spaced(text: &str) -> String {
    format!(" {text}")
}

/// Plan the patch for one element, or `None` when it is left untouched.
#[must_use]
pub fn plan_element(shape: &ElementShape, localized: &str) -> Option<TextPatch> {
    match select_strategy(shape) {
        RenderStrategy::Placeholder => Some(TextPatch::SetPlaceholder {
            text: localized.to_owned(),
        }),
        RenderStrategy::Skip => None,
        RenderStrategy::LeadingTextNode { index } => Some(TextPatch::SetTextNode {
            index,
            text: spaced(localized),
        }),
        RenderStrategy::AppendTextNode => Some(TextPatch::AppendTextNode {
            text: spaced(localized),
        }),
        RenderStrategy::FullText => Some(TextPatch::SetTextContent {
            text: localized.to_owned(),
        }),
    }
}

/// Pure model of the child-list mutation: the element's direct children
/// after the plan for `localized` is applied.
///
/// Input-like shapes come back unchanged; their text lives in the
/// placeholder attribute, not the child list.
#[must_use]
pub fn retext_children(shape: &ElementShape, localized: &str) -> Vec<ChildNode> {
    let mut children = shape.children.clone();
    match plan_element(shape, localized) {
        Some(TextPatch::SetTextNode { index, text }) => {
            children[index] = ChildNode::Text(text);
        }
        Some(TextPatch::AppendTextNode { text }) => {
            children.push(ChildNode::Text(text));
        }
        Some(TextPatch::SetTextContent { text }) => {
            children = vec![ChildNode::Text(text)];
        }
        Some(TextPatch::SetPlaceholder { .. }) | None => {}
    }
    children
}

/// Plan a full document sweep.
///
/// `resolve` maps a message key to its localized string under the
/// active locale; no parameters pass through this path. `active_code`
/// becomes the locale-selection control's value.
#[must_use]
pub fn plan_document<F>(flagged: &[FlaggedElement], active_code: &str, resolve: F) -> DocumentPatch
where
    F: Fn(&str) -> String,
{
    let mut elements = Vec::new();
    for (element_index, el) in flagged.iter().enumerate() {
        let localized = resolve(&el.key);
        if let Some(patch) = plan_element(&el.shape, &localized) {
            elements.push(ElementPatch {
                element_index,
                patch,
            });
        }
    }
    #[cfg(feature = "tracing")]
    trace!(
        flagged = flagged.len(),
        patched = elements.len(),
        "planned document sweep"
    );
    DocumentPatch {
        elements,
        select_value: active_code.to_owned(),
    }
}
