use std::rc::Rc;

use leptos::*;

use super::context::expect_select;
use super::registry::{memoized_registry, ContentDecl, ContentNode, SelectNode};
use super::{PopupController, PopupState, SelectContext, SelectTree, SelectionState, TriggerDecl};
use crate::primitives::{bool_token, merge_layout_class};
use crate::{Button, ButtonVariant, Icon, IconName, IconSize, MenuItem, MenuSeparator, MenuSurface};

#[component]
/// Single-choice select assembled from a typed declaration tree.
///
/// Supplying `value` makes the select controlled for its whole lifetime; otherwise it owns
/// its value, seeded once from `default_value`. The option registry is rebuilt only when
/// `tree` changes identity. Descendants receive the [`SelectContext`] explicitly and may
/// also look it up from this component's scope.
pub fn Select(
    /// Declaration of trigger, value display, and options.
    #[prop(into)]
    tree: MaybeSignal<SelectTree>,
    /// Caller-owned value. Presence fixes controlled mode.
    #[prop(optional, into)]
    value: Option<MaybeSignal<String>>,
    /// Initial value for uncontrolled mode.
    #[prop(optional, into)]
    default_value: Option<String>,
    /// Notified on every option activation.
    #[prop(optional)]
    on_value_change: Option<Callback<Option<String>>>,
    /// Disables the trigger and marks every option.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Popup collaborator. Defaults to [`PopupState`].
    #[prop(optional)]
    popup: Option<Rc<dyn PopupController>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    warn_on_conflicting_values(value.as_ref(), default_value.as_deref());

    let state = SelectionState::new(value, on_value_change, default_value);
    let tree = Signal::derive(move || tree.get());
    let options = memoized_registry(tree);
    let tree = create_memo(move |_| tree.get());
    let popup = popup.unwrap_or_else(|| Rc::new(PopupState::new()));
    let disabled = Signal::derive(move || disabled.get());
    let select = SelectContext::new(state, options.into(), disabled, popup);
    provide_context(select.clone());

    let mode = if state.is_controlled() {
        "controlled"
    } else {
        "uncontrolled"
    };
    let status = select.clone();
    let body = select.clone();
    view! {
        <div
            class=merge_layout_class("ui-select", layout_class)
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-slot=ui_slot
            data-ui-mode=mode
            data-ui-state=move || {
                if status.is_open() {
                    "open"
                } else {
                    "closed"
                }
            }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {move || tree.with(|tree| render_tree(tree, &body))}
        </div>
    }
}

/// Logs when both value props are set; returns whether it did.
fn warn_on_conflicting_values(value: Option<&MaybeSignal<String>>, default: Option<&str>) -> bool {
    let conflicting = value.is_some() && default.is_some();
    if conflicting {
        logging::debug_warn!(
            "Select received both `value` and `default_value`; the default is ignored"
        );
    }
    conflicting
}

fn render_tree(tree: &SelectTree, select: &SelectContext) -> View {
    tree.nodes()
        .iter()
        .map(|node| match node {
            SelectNode::Trigger(trigger) => render_trigger(trigger, select),
            SelectNode::Value(value) => {
                value_view(select.clone(), value.content.clone(), value.placeholder.clone())
                    .into_view()
            }
            SelectNode::Content(content) => render_content(content, select),
            SelectNode::Other(view) => view.run(),
        })
        .collect_view()
}

fn render_trigger(trigger: &TriggerDecl, select: &SelectContext) -> View {
    let content = trigger.content.clone();
    let value = trigger.value.clone();
    let inner = select.clone();
    let children = Box::new(move || {
        let value = value.map(|value| value_view(inner, value.content, value.placeholder));
        Fragment::new(vec![content.map(|content| content.run()).into_view(), value.into_view()])
    });
    trigger_view(
        select.clone(),
        trigger_disabled(trigger),
        trigger.aria_label.clone().unwrap_or_default(),
        None,
        children,
    )
    .into_view()
}

fn trigger_disabled(trigger: &TriggerDecl) -> Signal<bool> {
    let disabled = trigger.disabled;
    Signal::derive(move || disabled)
}

fn press_trigger(select: &SelectContext, disabled: Signal<bool>) -> bool {
    select.activate_trigger(disabled.get_untracked())
}

fn render_content(content: &ContentDecl, select: &SelectContext) -> View {
    let nodes = content.nodes.clone();
    let inner = select.clone();
    let children: ChildrenFn = Rc::new(move || {
        Fragment::new(
            nodes
                .iter()
                .map(|node| match node {
                    ContentNode::Item(item) => {
                        let label = item.label.clone();
                        item_view(
                            inner.clone(),
                            item.value.clone(),
                            None,
                            Box::new(move || Fragment::new(vec![label.into_view()])),
                        )
                        .into_view()
                    }
                    ContentNode::Label(label) => label_view(label.clone().into_view()).into_view(),
                    ContentNode::Separator => view! { <MenuSeparator /> }.into_view(),
                    ContentNode::Other(view) => view.run(),
                })
                .collect(),
        )
    });
    content_view(select.clone(), content.aria_label.clone(), None, children).into_view()
}

fn trigger_view(
    select: SelectContext,
    disabled: Signal<bool>,
    aria_label: String,
    layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let effective_disabled = Signal::derive({
        let select = select.clone();
        move || select.is_disabled() || disabled.get()
    });
    let expanded = Signal::derive({
        let select = select.clone();
        move || select.is_open()
    });

    view! {
        <Button
            variant=ButtonVariant::Field
            layout_class=layout_class.unwrap_or("")
            role="combobox"
            aria_label=aria_label
            aria_haspopup="listbox"
            aria_expanded=expanded
            disabled=effective_disabled
            ui_slot="select-trigger"
            trailing_icon=IconName::ChevronDown
            on_click=Callback::new(move |_| {
                press_trigger(&select, disabled);
            })
        >
            {children()}
        </Button>
    }
}

fn value_view(
    select: SelectContext,
    content: Option<ViewFn>,
    placeholder: Option<String>,
) -> impl IntoView {
    let empty = Signal::derive({
        let select = select.clone();
        move || select.value().is_empty()
    });
    view! {
        <span
            data-ui-slot="select-value"
            data-ui-state=move || {
                if empty.get() {
                    "empty"
                } else {
                    "filled"
                }
            }
        >
            {move || select.resolve_display(content.as_ref(), placeholder.as_deref())}
        </span>
    }
}

fn content_view(
    select: SelectContext,
    aria_label: Option<String>,
    layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    move || {
        select.is_open().then(|| {
            let children = children.clone();
            view! {
                <MenuSurface
                    layout_class=layout_class.unwrap_or("")
                    role="listbox"
                    aria_label=aria_label.clone()
                    ui_slot="select-content"
                >
                    {children()}
                </MenuSurface>
            }
        })
    }
}

fn item_view(
    select: SelectContext,
    value: Option<String>,
    layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let selected = Signal::derive({
        let select = select.clone();
        let value = value.clone();
        move || value.as_deref() == Some(select.value().as_str())
    });
    let disabled = select.disabled_signal();

    view! {
        <MenuItem
            layout_class=layout_class.unwrap_or("")
            role="option"
            aria_selected=Signal::derive(move || bool_token(selected.get()).to_string())
            aria_disabled=disabled
            selected=selected
            on_click=Callback::new(move |_| select.activate_option(value.clone()))
        >
            <span data-ui-slot="label">{children()}</span>
            {move || {
                selected
                    .get()
                    .then(|| view! { <Icon icon=IconName::Check size=IconSize::Sm /> })
            }}
        </MenuItem>
    }
}

fn label_view(children: View) -> impl IntoView {
    view! {
        <div role="presentation" data-ui-slot="select-label">
            {children}
        </div>
    }
}

#[component]
/// Button that opens and closes the select popup.
///
/// # Panics
///
/// Panics when composed without `select` outside a [`Select`].
pub fn SelectTrigger(
    /// Select to drive. Defaults to the enclosing select.
    #[prop(optional)]
    select: Option<SelectContext>,
    /// Disables this trigger in addition to the select-wide flag.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let select = expect_select(select, "SelectTrigger");
    trigger_view(
        select,
        Signal::derive(move || disabled.get()),
        aria_label.unwrap_or_default(),
        layout_class,
        children,
    )
}

#[component]
/// Renders the label of the current value, a placeholder, or caller content.
///
/// # Panics
///
/// Panics when composed without `select` outside a [`Select`].
pub fn SelectValue(
    /// Select to read. Defaults to the enclosing select.
    #[prop(optional)]
    select: Option<SelectContext>,
    /// Shown while nothing is selected.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Replaces the resolved label.
    #[prop(optional, into)]
    content: Option<ViewFn>,
) -> impl IntoView {
    let select = expect_select(select, "SelectValue");
    value_view(select, content, placeholder)
}

#[component]
/// Popup list, rendered only while the popup is open.
///
/// # Panics
///
/// Panics when composed without `select` outside a [`Select`].
pub fn SelectContent(
    /// Select whose popup gates rendering. Defaults to the enclosing select.
    #[prop(optional)]
    select: Option<SelectContext>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let select = expect_select(select, "SelectContent");
    content_view(select, aria_label, layout_class, children)
}

#[component]
/// One option. Activation reports `value` through the select's change function.
///
/// # Panics
///
/// Panics when composed without `select` outside a [`Select`].
pub fn SelectItem(
    /// Select to update. Defaults to the enclosing select.
    #[prop(optional)]
    select: Option<SelectContext>,
    /// Value reported on activation. Missing values are forwarded as `None`.
    #[prop(optional, into)]
    value: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let select = expect_select(select, "SelectItem");
    item_view(select, value, layout_class, children)
}

#[component]
/// Non-interactive caption inside the popup list.
pub fn SelectLabel(children: Children) -> impl IntoView {
    label_view(children().into_view())
}

#[component]
/// Divider inside the popup list.
pub fn SelectSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! { <MenuSeparator layout_class=layout_class.unwrap_or("") /> }
}
