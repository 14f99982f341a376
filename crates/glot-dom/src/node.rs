//! Element snapshots: what the planner sees instead of a live DOM.

use serde::Serialize;

/// Element categories that matter for text placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// `<input>`, a single-line text control.
    TextInput,
    /// `<textarea>`, a multi-line text control.
    TextArea,
    /// Any other element.
    Other,
}

impl ElementKind {
    /// Whether the element's visible text is its placeholder attribute
    /// rather than its content.
    #[must_use]
    pub const fn is_input_like(self) -> bool {
        matches!(self, Self::TextInput | Self::TextArea)
    }
}

/// One direct child in an element snapshot.
///
/// Element children carry no payload: the planner never descends into
/// them, it only routes text around them. Node types other than text
/// and element (comments and the like) are not snapshotted at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildNode {
    /// A child element (icon markup and the like).
    Element,
    /// A text node with its current content.
    Text(String),
}

impl ChildNode {
    /// Whether this is a text node with any non-whitespace content.
    #[must_use]
    pub fn is_visible_text(&self) -> bool {
        matches!(self, Self::Text(s) if !s.trim().is_empty())
    }
}

/// Everything the planner needs to know about one flagged element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementShape {
    /// Element category.
    pub kind: ElementKind,
    /// Whether a `placeholder` attribute is present. Its current value
    /// is irrelevant; presence alone routes the text there.
    pub has_placeholder: bool,
    /// Direct children, in document order.
    pub children: Vec<ChildNode>,
}

impl ElementShape {
    /// A childless non-input element.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            kind: ElementKind::Other,
            has_placeholder: false,
            children: Vec::new(),
        }
    }

    /// Whether any direct child is an element.
    ///
    /// Element children (icons) are what force the careful text-node
    /// rewrite; text-only content can be replaced wholesale, which also
    /// keeps repeated sweeps stable.
    #[must_use]
    pub fn has_element_children(&self) -> bool {
        self.children
            .iter()
            .any(|child| matches!(child, ChildNode::Element))
    }
}

/// A `data-i18n` hit: the message key plus the element's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedElement {
    /// Message key from the marker attribute.
    pub key: String,
    /// Snapshot of the element.
    pub shape: ElementShape,
}
