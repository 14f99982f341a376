//! Per-element render strategy selection.
//!
//! The strategy is decided once per element, from its snapshot alone,
//! and the decision is an enumerated value. Each branch is testable on
//! its own, and the planner in [`crate::patch`] is a straight mapping
//! from strategy to patch operation.

use serde::Serialize;

use crate::node::{ChildNode, ElementShape};

/// Where the localized text for an element goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStrategy {
    /// Input-like control with a `placeholder` attribute: rewrite the
    /// placeholder.
    Placeholder,
    /// Input-like control without one: leave the element alone. Its
    /// visible text is its user-supplied content, not ours to touch.
    Skip,
    /// Element children present: rewrite the first direct text-node
    /// child that has visible content, preserving sibling elements on
    /// either side.
    LeadingTextNode {
        /// Position of that text node among the snapshotted children.
        index: usize,
    },
    /// Element children present but no visible text node among them
    /// (icon-only elements): append a trailing text node.
    AppendTextNode,
    /// No element children: replace the whole text content.
    FullText,
}

/// Pick the strategy for one element shape.
///
/// Dispatch keys on *element* children: only they force the careful
/// text-node rewrite. Text-only content is replaced wholesale, which
/// keeps repeated sweeps byte-stable (the full replace never
/// reintroduces the icon-spacing prefix).
#[must_use]
pub fn select_strategy(shape: &ElementShape) -> RenderStrategy {
    if shape.kind.is_input_like() {
        return if shape.has_placeholder {
            RenderStrategy::Placeholder
        } else {
            RenderStrategy::Skip
        };
    }
    if !shape.has_element_children() {
        return RenderStrategy::FullText;
    }
    match shape.children.iter().position(ChildNode::is_visible_text) {
        Some(index) => RenderStrategy::LeadingTextNode { index },
        None => RenderStrategy::AppendTextNode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ElementKind;

    fn shape(kind: ElementKind, has_placeholder: bool, children: Vec<ChildNode>) -> ElementShape {
        ElementShape {
            kind,
            has_placeholder,
            children,
        }
    }

    #[test]
    fn input_with_placeholder_targets_placeholder() {
        let s = shape(ElementKind::TextInput, true, Vec::new());
        assert_eq!(select_strategy(&s), RenderStrategy::Placeholder);
        let s = shape(ElementKind::TextArea, true, Vec::new());
        assert_eq!(select_strategy(&s), RenderStrategy::Placeholder);
    }

    #[test]
    fn input_without_placeholder_is_skipped() {
        let s = shape(ElementKind::TextInput, false, Vec::new());
        assert_eq!(select_strategy(&s), RenderStrategy::Skip);
    }

    #[test]
    fn icon_then_text_targets_the_text_node() {
        let s = shape(
            ElementKind::Other,
            false,
            vec![ChildNode::Element, ChildNode::Text(" Send".into())],
        );
        assert_eq!(
            select_strategy(&s),
            RenderStrategy::LeadingTextNode { index: 1 }
        );
    }

    #[test]
    fn first_visible_text_node_wins() {
        let s = shape(
            ElementKind::Other,
            false,
            vec![
                ChildNode::Text("  ".into()),
                ChildNode::Element,
                ChildNode::Text(" Send".into()),
                ChildNode::Text(" again".into()),
            ],
        );
        assert_eq!(
            select_strategy(&s),
            RenderStrategy::LeadingTextNode { index: 2 }
        );
    }

    #[test]
    fn text_only_content_is_replaced_wholesale() {
        let s = shape(
            ElementKind::Other,
            false,
            vec![ChildNode::Text("Title".into())],
        );
        assert_eq!(select_strategy(&s), RenderStrategy::FullText);
        // Whitespace-only text without elements too.
        let s = shape(ElementKind::Other, false, vec![ChildNode::Text("  ".into())]);
        assert_eq!(select_strategy(&s), RenderStrategy::FullText);
    }

    #[test]
    fn text_before_an_icon_is_still_the_rewrite_target() {
        let s = shape(
            ElementKind::Other,
            false,
            vec![ChildNode::Text("Send ".into()), ChildNode::Element],
        );
        assert_eq!(
            select_strategy(&s),
            RenderStrategy::LeadingTextNode { index: 0 }
        );
    }

    #[test]
    fn icon_only_element_appends() {
        let s = shape(ElementKind::Other, false, vec![ChildNode::Element]);
        assert_eq!(select_strategy(&s), RenderStrategy::AppendTextNode);
    }

    #[test]
    fn whitespace_only_text_counts_as_invisible() {
        let s = shape(
            ElementKind::Other,
            false,
            vec![ChildNode::Element, ChildNode::Text("   ".into())],
        );
        assert_eq!(select_strategy(&s), RenderStrategy::AppendTextNode);
    }

    #[test]
    fn childless_element_replaces_full_text() {
        let s = shape(ElementKind::Other, false, Vec::new());
        assert_eq!(select_strategy(&s), RenderStrategy::FullText);
    }

    #[test]
    fn placeholder_attribute_on_non_input_is_ignored() {
        // The placeholder route exists only for input-like controls.
        let s = shape(ElementKind::Other, true, Vec::new());
        assert_eq!(select_strategy(&s), RenderStrategy::FullText);
    }
}
