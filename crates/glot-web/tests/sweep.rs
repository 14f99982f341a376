//! End-to-end sweeps over fake document snapshots.
//!
//! These exercise the same planning path the wasm exports run, with the
//! live-DOM snapshot replaced by hand-built shapes mirroring the chat
//! client's markup.

#![cfg(not(target_arch = "wasm32"))]

use std::collections::HashMap;

use pretty_assertions::assert_eq;

use glot_dom::{
    ChildNode, DocumentPatch, ElementKind, ElementShape, FlaggedElement, TextPatch,
};
use glot_i18n::{ControllerConfig, LocaleAction, LocaleController, builtin_catalog};
use glot_web::sweep::plan_sweep;

fn controller(persisted: Option<&str>) -> LocaleController {
    LocaleController::new(builtin_catalog(), ControllerConfig::default(), persisted)
}

/// The chat page reduced to the element shapes that matter.
fn chat_page() -> Vec<FlaggedElement> {
    vec![
        // <h1 data-i18n="chat_header"></h1>
        FlaggedElement {
            key: "chat_header".into(),
            shape: ElementShape::empty(),
        },
        // <input data-i18n="placeholder_message" placeholder="...">
        FlaggedElement {
            key: "placeholder_message".into(),
            shape: ElementShape {
                kind: ElementKind::TextInput,
                has_placeholder: true,
                children: Vec::new(),
            },
        },
        // <button data-i18n="btn_send"><i class="icon"></i> Send</button>
        FlaggedElement {
            key: "btn_send".into(),
            shape: ElementShape {
                kind: ElementKind::Other,
                has_placeholder: false,
                children: vec![ChildNode::Element, ChildNode::Text(" Send".into())],
            },
        },
        // <button data-i18n="toggle_log"><i class="icon"></i></button>
        FlaggedElement {
            key: "toggle_log".into(),
            shape: ElementShape {
                kind: ElementKind::Other,
                has_placeholder: false,
                children: vec![ChildNode::Element],
            },
        },
    ]
}

/// Replay a plan onto the snapshots, as the DOM applier would.
fn apply_to_shapes(flagged: &[FlaggedElement], plan: &DocumentPatch) -> Vec<FlaggedElement> {
    let mut result = flagged.to_vec();
    for element_patch in &plan.elements {
        let el = &mut result[element_patch.element_index];
        el.shape.children = retext_children_for(el, &element_patch.patch);
    }
    result
}

fn retext_children_for(el: &FlaggedElement, patch: &TextPatch) -> Vec<ChildNode> {
    let mut children = el.shape.children.clone();
    match patch {
        TextPatch::SetTextNode { index, text } => children[*index] = ChildNode::Text(text.clone()),
        TextPatch::AppendTextNode { text } => children.push(ChildNode::Text(text.clone())),
        TextPatch::SetTextContent { text } => children = vec![ChildNode::Text(text.clone())],
        TextPatch::SetPlaceholder { .. } => {}
    }
    children
}

#[test]
fn zh_sweep_rewrites_the_chat_page() {
    let page = chat_page();
    let plan = plan_sweep(&controller(Some("zh")), &page);

    assert_eq!(plan.select_value, "zh");
    assert_eq!(
        plan.elements.len(),
        4,
        "every flagged element plans a patch"
    );
    assert_eq!(
        plan.elements[0].patch,
        TextPatch::SetTextContent {
            text: "与 RealEgo 对话".into(),
        }
    );
    assert_eq!(
        plan.elements[1].patch,
        TextPatch::SetPlaceholder {
            text: "输入消息...".into(),
        }
    );
    // The icon element survives; the trailing text becomes " 发送".
    assert_eq!(
        plan.elements[2].patch,
        TextPatch::SetTextNode {
            index: 1,
            text: " 发送".into(),
        }
    );
    // The icon-only toggle gains a trailing text node.
    assert_eq!(
        plan.elements[3].patch,
        TextPatch::AppendTextNode {
            text: " 显示/隐藏日志".into(),
        }
    );
    let applied = apply_to_shapes(&page, &plan);
    assert_eq!(
        applied[2].shape.children,
        vec![ChildNode::Element, ChildNode::Text(" 发送".into())]
    );
    assert_eq!(
        applied[3].shape.children,
        vec![ChildNode::Element, ChildNode::Text(" 显示/隐藏日志".into())]
    );
}

#[test]
fn sweep_is_idempotent_without_a_locale_change() {
    let page = chat_page();
    let ctl = controller(Some("zh"));

    let first_plan = plan_sweep(&ctl, &page);
    let once = apply_to_shapes(&page, &first_plan);
    let second_plan = plan_sweep(&ctl, &once);
    let twice = apply_to_shapes(&once, &second_plan);

    assert_eq!(once, twice);
}

#[test]
fn locale_switch_persists_then_rerenders() {
    let mut ctl = controller(None);
    let mut storage: HashMap<String, String> = HashMap::new();
    let mut rendered = false;

    for action in ctl.set_locale("zh") {
        match action {
            LocaleAction::Persist { key, value } => {
                storage.insert(key.to_owned(), value.to_owned());
            }
            LocaleAction::Rerender => rendered = true,
        }
    }

    assert_eq!(storage.get("lang").map(String::as_str), Some("zh"));
    assert!(rendered);

    // An unsupported code changes nothing.
    assert!(ctl.set_locale("xx").is_empty());
    assert_eq!(storage.get("lang").map(String::as_str), Some("zh"));
}

#[test]
fn unknown_keys_render_as_themselves() {
    let flagged = vec![FlaggedElement {
        key: "nonexistent_key".into(),
        shape: ElementShape::empty(),
    }];
    let plan = plan_sweep(&controller(Some("zh")), &flagged);
    assert_eq!(
        plan.elements[0].patch,
        TextPatch::SetTextContent {
            text: "nonexistent_key".into(),
        }
    );
}

#[test]
fn icon_only_elements_gain_trailing_text() {
    let flagged = vec![FlaggedElement {
        key: "btn_send".into(),
        shape: ElementShape {
            kind: ElementKind::Other,
            has_placeholder: false,
            children: vec![ChildNode::Element],
        },
    }];
    let plan = plan_sweep(&controller(None), &flagged);
    assert_eq!(
        plan.elements[0].patch,
        TextPatch::AppendTextNode {
            text: " Send".into(),
        }
    );
}
