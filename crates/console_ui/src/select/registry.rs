//! Typed declaration tree for a [`Select`](super::Select) and the option registry derived
//! from it.
//!
//! A [`SelectTree`] is the caller's declaration of trigger, value display, and popup
//! content. The [`OptionRegistry`] is recomputed wholesale from that tree and is keyed on
//! tree identity: cloning a tree keeps its identity, building a new one does not.

use std::fmt;
use std::rc::Rc;

use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable option as it appears in configuration and in the declaration tree.
pub struct SelectOptionSpec {
    /// Value reported on activation. Options without a value never enter the registry.
    #[serde(default)]
    pub value: Option<String>,
    /// Label rendered in the list and in the value display.
    pub label: String,
}

impl SelectOptionSpec {
    /// Creates an option with a value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            label: label.into(),
        }
    }

    /// Creates an option that carries a label but no value.
    pub fn without_value(label: impl Into<String>) -> Self {
        Self {
            value: None,
            label: label.into(),
        }
    }
}

#[derive(Clone, Default)]
/// Declaration of the value display region.
pub struct ValueDecl {
    /// Text shown while nothing is selected.
    pub placeholder: Option<String>,
    /// Explicit content that replaces the resolved label.
    pub content: Option<ViewFn>,
}

impl ValueDecl {
    /// Value display with a placeholder.
    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
            content: None,
        }
    }

    /// Replaces the resolved label with caller content.
    pub fn content(mut self, content: impl Into<ViewFn>) -> Self {
        self.content = Some(content.into());
        self
    }
}

impl fmt::Debug for ValueDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueDecl")
            .field("placeholder", &self.placeholder)
            .field("content", &self.content.as_ref().map(|_| ".."))
            .finish()
    }
}

#[derive(Clone, Default)]
/// Declaration of the trigger button.
pub struct TriggerDecl {
    /// Accessible name for the trigger.
    pub aria_label: Option<String>,
    /// Disables this trigger in addition to the select-wide flag.
    pub disabled: bool,
    /// Caller content rendered before the value display.
    pub content: Option<ViewFn>,
    /// Value display nested inside the trigger.
    pub value: Option<ValueDecl>,
}

impl TriggerDecl {
    /// Trigger with no content of its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accessible name.
    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    /// Disables this trigger.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Adds caller content ahead of the value display.
    pub fn content(mut self, content: impl Into<ViewFn>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Nests a value display inside the trigger.
    pub fn value(mut self, value: ValueDecl) -> Self {
        self.value = Some(value);
        self
    }
}

impl fmt::Debug for TriggerDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerDecl")
            .field("aria_label", &self.aria_label)
            .field("disabled", &self.disabled)
            .field("content", &self.content.as_ref().map(|_| ".."))
            .field("value", &self.value)
            .finish()
    }
}

#[derive(Clone)]
/// Direct child of a content container.
pub enum ContentNode {
    /// Selectable option.
    Item(SelectOptionSpec),
    /// Non-interactive group caption.
    Label(String),
    /// Visual divider.
    Separator,
    /// Arbitrary content. Ignored by option derivation.
    Other(ViewFn),
}

impl fmt::Debug for ContentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(item) => f.debug_tuple("Item").field(item).finish(),
            Self::Label(label) => f.debug_tuple("Label").field(label).finish(),
            Self::Separator => f.write_str("Separator"),
            Self::Other(_) => f.write_str("Other(..)"),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Popup list declaration.
pub struct ContentDecl {
    /// Accessible name for the listbox.
    pub aria_label: Option<String>,
    /// Children in declaration order.
    pub nodes: Vec<ContentNode>,
}

#[derive(Clone)]
/// Top-level node of a select declaration.
pub enum SelectNode {
    /// Trigger button.
    Trigger(TriggerDecl),
    /// Value display outside the trigger.
    Value(ValueDecl),
    /// Popup list of options.
    Content(ContentDecl),
    /// Arbitrary content. Ignored by option derivation.
    Other(ViewFn),
}

impl fmt::Debug for SelectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trigger(trigger) => f.debug_tuple("Trigger").field(trigger).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Content(content) => f.debug_tuple("Content").field(content).finish(),
            Self::Other(_) => f.write_str("Other(..)"),
        }
    }
}

#[derive(Clone)]
/// Shared, immutable declaration tree.
///
/// Equality is identity: two handles are equal only when they point at the same
/// declaration.
pub struct SelectTree(Rc<[SelectNode]>);

impl SelectTree {
    /// Starts a typed declaration.
    pub fn builder() -> SelectTreeBuilder {
        SelectTreeBuilder::default()
    }

    /// Standard trigger + popup layout over a flat option list.
    pub fn from_options(
        placeholder: Option<String>,
        options: impl IntoIterator<Item = SelectOptionSpec>,
    ) -> Self {
        let value = ValueDecl {
            placeholder,
            content: None,
        };
        Self::builder()
            .trigger(TriggerDecl::new().value(value))
            .content(|content| content.items(options))
            .build()
    }

    /// Top-level nodes in declaration order.
    pub fn nodes(&self) -> &[SelectNode] {
        &self.0
    }
}

impl Default for SelectTree {
    fn default() -> Self {
        Self(Rc::from(Vec::new()))
    }
}

impl PartialEq for SelectTree {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SelectTree {}

impl fmt::Debug for SelectTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[derive(Debug, Default)]
/// Builder for [`SelectTree`].
pub struct SelectTreeBuilder {
    nodes: Vec<SelectNode>,
}

impl SelectTreeBuilder {
    /// Appends a trigger.
    pub fn trigger(mut self, trigger: TriggerDecl) -> Self {
        self.nodes.push(SelectNode::Trigger(trigger));
        self
    }

    /// Appends a standalone value display.
    pub fn value(mut self, value: ValueDecl) -> Self {
        self.nodes.push(SelectNode::Value(value));
        self
    }

    /// Appends a popup list built by `build`.
    pub fn content(mut self, build: impl FnOnce(ContentBuilder) -> ContentBuilder) -> Self {
        let content = build(ContentBuilder::default());
        self.nodes.push(SelectNode::Content(content.decl));
        self
    }

    /// Appends arbitrary content.
    pub fn other(mut self, view: impl Into<ViewFn>) -> Self {
        self.nodes.push(SelectNode::Other(view.into()));
        self
    }

    /// Freezes the declaration.
    pub fn build(self) -> SelectTree {
        SelectTree(Rc::from(self.nodes))
    }
}

#[derive(Debug, Default)]
/// Builder for the popup list of a [`SelectTree`].
pub struct ContentBuilder {
    decl: ContentDecl,
}

impl ContentBuilder {
    /// Sets the listbox accessible name.
    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.decl.aria_label = Some(aria_label.into());
        self
    }

    /// Appends an option.
    pub fn item(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.option(SelectOptionSpec::new(value, label))
    }

    /// Appends a prepared option.
    pub fn option(mut self, option: SelectOptionSpec) -> Self {
        self.decl.nodes.push(ContentNode::Item(option));
        self
    }

    /// Appends every option in order.
    pub fn items(mut self, options: impl IntoIterator<Item = SelectOptionSpec>) -> Self {
        self.decl
            .nodes
            .extend(options.into_iter().map(ContentNode::Item));
        self
    }

    /// Appends a group caption.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.decl.nodes.push(ContentNode::Label(label.into()));
        self
    }

    /// Appends a divider.
    pub fn separator(mut self) -> Self {
        self.decl.nodes.push(ContentNode::Separator);
        self
    }

    /// Appends arbitrary content.
    pub fn other(mut self, view: impl Into<ViewFn>) -> Self {
        self.decl.nodes.push(ContentNode::Other(view.into()));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered value to label lookup derived from a [`SelectTree`].
pub struct OptionRegistry {
    entries: Vec<(String, String)>,
}

impl OptionRegistry {
    /// Walks `Content` nodes and their direct `Item` children.
    ///
    /// Items without a value are skipped. A repeated value keeps its first position and
    /// takes the later label.
    pub fn derive(tree: &SelectTree) -> Self {
        let mut registry = Self::default();
        for node in tree.nodes() {
            let SelectNode::Content(content) = node else {
                continue;
            };
            for child in &content.nodes {
                let ContentNode::Item(item) = child else {
                    continue;
                };
                if let Some(value) = item.value.as_ref() {
                    registry.insert(value.clone(), item.label.clone());
                }
            }
        }
        registry
    }

    /// Registers `label` under `value`, returning the label it replaced.
    fn insert(&mut self, value: String, label: String) -> Option<String> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == value) {
            Some((_, slot)) => {
                logging::debug_warn!(
                    "duplicate select option value `{value}`; the later label wins"
                );
                Some(std::mem::replace(slot, label))
            }
            None => {
                self.entries.push((value, label));
                None
            }
        }
    }

    /// Label registered for `value`.
    pub fn label(&self, value: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == value)
            .map(|(_, label)| label.as_str())
    }

    /// Whether `value` has a registered label.
    pub fn contains(&self, value: &str) -> bool {
        self.label(value).is_some()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no option carries a value.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(value, label)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(value, label)| (value.as_str(), label.as_str()))
    }
}

/// Registry memo that recomputes only when the tree identity changes.
pub fn memoized_registry(tree: Signal<SelectTree>) -> Memo<OptionRegistry> {
    let tree = create_memo(move |_| tree.get());
    create_memo(move |_| tree.with(OptionRegistry::derive))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn regions() -> SelectTree {
        SelectTree::builder()
            .trigger(TriggerDecl::new().value(ValueDecl::placeholder("Pick a region")))
            .content(|content| content.item("east", "Eastern").item("west", "Western"))
            .build()
    }

    #[test]
    fn derive_preserves_declaration_order() {
        let registry = OptionRegistry::derive(&regions());
        let pairs: Vec<_> = registry.iter().collect();
        assert_eq!(pairs, vec![("east", "Eastern"), ("west", "Western")]);
        assert_eq!(registry.label("west"), Some("Western"));
        assert_eq!(registry.label("north"), None);
    }

    #[test]
    fn insert_reports_the_replaced_label_on_duplicates() {
        let mut registry = OptionRegistry::default();
        assert_eq!(registry.insert("a".into(), "A".into()), None);
        assert_eq!(registry.insert("a".into(), "B".into()), Some("A".to_string()));
        assert_eq!(registry.label("a"), Some("B"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn later_duplicate_overwrites_label_in_place() {
        let tree = SelectTree::builder()
            .content(|content| {
                content
                    .item("a", "First")
                    .item("b", "Bee")
                    .item("a", "Second")
            })
            .build();
        let registry = OptionRegistry::derive(&tree);
        assert_eq!(registry.label("a"), Some("Second"));
        assert_eq!(registry.len(), 2);
        let values: Vec<_> = registry.iter().map(|(value, _)| value).collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn options_without_value_are_excluded() {
        let tree = SelectTree::builder()
            .content(|content| {
                content
                    .option(SelectOptionSpec::without_value("Unassigned"))
                    .item("paid", "Paid")
            })
            .build();
        let registry = OptionRegistry::derive(&tree);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("paid"));
    }

    #[test]
    fn only_direct_items_of_content_are_registered() {
        let tree = SelectTree::builder()
            .trigger(TriggerDecl::new().aria_label("Status"))
            .value(ValueDecl::placeholder("Any status"))
            .other(|| "hint")
            .content(|content| {
                content
                    .label("Fulfilment")
                    .item("shipped", "Shipped")
                    .separator()
                    .other(|| "footer")
            })
            .build();
        let registry = OptionRegistry::derive(&tree);
        let pairs: Vec<_> = registry.iter().collect();
        assert_eq!(pairs, vec![("shipped", "Shipped")]);
    }

    #[test]
    fn items_across_multiple_content_nodes_are_merged() {
        let tree = SelectTree::builder()
            .content(|content| content.item("a", "A"))
            .content(|content| content.item("b", "B").item("a", "A2"))
            .build();
        let registry = OptionRegistry::derive(&tree);
        let pairs: Vec<_> = registry.iter().collect();
        assert_eq!(pairs, vec![("a", "A2"), ("b", "B")]);
    }

    #[test]
    fn derivation_is_idempotent() {
        let tree = regions();
        assert_eq!(OptionRegistry::derive(&tree), OptionRegistry::derive(&tree));
    }

    #[test]
    fn tree_equality_is_identity() {
        let tree = regions();
        let same = tree.clone();
        assert_eq!(tree, same);
        assert_ne!(tree, regions());
        assert!(SelectTree::default().nodes().is_empty());
    }

    #[test]
    fn from_options_nests_placeholder_in_trigger() {
        let tree = SelectTree::from_options(
            Some("Pick one".to_string()),
            [SelectOptionSpec::new("x", "Ex")],
        );
        match tree.nodes() {
            [SelectNode::Trigger(trigger), SelectNode::Content(content)] => {
                let value = trigger.value.as_ref().expect("nested value");
                assert_eq!(value.placeholder.as_deref(), Some("Pick one"));
                assert_eq!(content.nodes.len(), 1);
            }
            other => panic!("unexpected layout: {other:?}"),
        }
    }

    #[test]
    fn option_spec_value_defaults_to_none() {
        let option: SelectOptionSpec =
            serde_json::from_str(r#"{ "label": "Draft" }"#).expect("parse");
        assert_eq!(option, SelectOptionSpec::without_value("Draft"));
    }

    #[test]
    fn memo_rebuilds_only_on_identity_change() {
        let runtime = create_runtime();
        let first = regions();
        let tree = create_rw_signal(first.clone());
        let derivations = Rc::new(Cell::new(0));
        let counter = Rc::clone(&derivations);
        let identity = create_memo(move |_| tree.get());
        let registry = create_memo(move |_| {
            counter.set(counter.get() + 1);
            identity.with(OptionRegistry::derive)
        });

        assert_eq!(registry.get().len(), 2);
        assert_eq!(derivations.get(), 1);

        tree.set(first.clone());
        assert_eq!(registry.get().len(), 2);
        assert_eq!(derivations.get(), 1);

        tree.set(
            SelectTree::builder()
                .content(|content| content.item("south", "Southern"))
                .build(),
        );
        assert_eq!(registry.get().label("south"), Some("Southern"));
        assert_eq!(derivations.get(), 2);

        let memoized = memoized_registry(tree.into());
        assert_eq!(memoized.get().len(), 1);
        runtime.dispose();
    }
}
