#![forbid(unsafe_code)]

//! DOM text-patch planning for Glot.
//!
//! The live document never appears in this crate. Elements flagged for
//! translation arrive as [`ElementShape`] snapshots; classification
//! ([`select_strategy`]) and planning ([`plan_element`],
//! [`plan_document`]) are pure functions over those snapshots, and the
//! output is a list of [`TextPatch`] operations the boundary crate
//! executes imperatively. That split keeps every branch of the rewrite
//! logic testable without a browser.

pub mod node;
pub mod patch;
pub mod strategy;

pub use node::{ChildNode, ElementKind, ElementShape, FlaggedElement};
pub use patch::{DocumentPatch, ElementPatch, TextPatch, plan_document, plan_element, retext_children};
pub use strategy::{RenderStrategy, select_strategy};
