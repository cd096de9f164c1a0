//! Shared handle threaded from a [`Select`](super::Select) to its parts.

use std::fmt;
use std::rc::Rc;

use leptos::*;

use super::{OptionRegistry, PopupController, SelectError, SelectionState};

/// What the value display renders, in resolution order.
#[derive(Clone)]
pub enum SelectDisplay {
    /// Caller content that replaces the label.
    Override(ViewFn),
    /// Registered label for the current value.
    Label(String),
    /// Placeholder for the empty selection.
    Placeholder(String),
    /// The raw value when nothing else applies.
    Raw(String),
}

impl SelectDisplay {
    /// Resolved text, or `None` for override content.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Override(_) => None,
            Self::Label(text) | Self::Placeholder(text) | Self::Raw(text) => Some(text),
        }
    }

    /// Whether the placeholder was chosen.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

impl fmt::Debug for SelectDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override(_) => f.write_str("Override(..)"),
            Self::Label(text) => f.debug_tuple("Label").field(text).finish(),
            Self::Placeholder(text) => f.debug_tuple("Placeholder").field(text).finish(),
            Self::Raw(text) => f.debug_tuple("Raw").field(text).finish(),
        }
    }
}

impl IntoView for SelectDisplay {
    fn into_view(self) -> View {
        match self {
            Self::Override(content) => content.run(),
            Self::Label(text) | Self::Placeholder(text) | Self::Raw(text) => text.into_view(),
        }
    }
}

/// Picks what the value display shows: override, label, placeholder (empty value only),
/// then the raw value.
pub fn resolve_display(
    options: &OptionRegistry,
    value: &str,
    content: Option<&ViewFn>,
    placeholder: Option<&str>,
) -> SelectDisplay {
    if let Some(content) = content {
        return SelectDisplay::Override(content.clone());
    }
    if let Some(label) = options.label(value) {
        return SelectDisplay::Label(label.to_string());
    }
    match placeholder {
        Some(placeholder) if value.is_empty() => {
            SelectDisplay::Placeholder(placeholder.to_string())
        }
        _ => SelectDisplay::Raw(value.to_string()),
    }
}

#[derive(Clone)]
/// Value, change function, options, and disabled flag of one select, plus its popup.
///
/// Rebuilt on every composition of the owning [`Select`](super::Select).
pub struct SelectContext {
    state: SelectionState,
    options: Signal<OptionRegistry>,
    disabled: Signal<bool>,
    popup: Rc<dyn PopupController>,
}

impl SelectContext {
    /// Bundles the parts a select shares with its descendants.
    pub fn new(
        state: SelectionState,
        options: Signal<OptionRegistry>,
        disabled: Signal<bool>,
        popup: Rc<dyn PopupController>,
    ) -> Self {
        Self {
            state,
            options,
            disabled,
            popup,
        }
    }

    /// Uses `explicit` when given, else the enclosing select's context.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Configuration`] naming `component` when neither exists.
    pub fn resolve(
        explicit: Option<SelectContext>,
        component: &'static str,
    ) -> Result<Self, SelectError> {
        explicit
            .or_else(use_context::<SelectContext>)
            .ok_or(SelectError::Configuration { component })
    }

    /// Underlying value ownership.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Current value, tracked.
    pub fn value(&self) -> String {
        self.state.current_value()
    }

    /// Current value without subscribing.
    pub fn value_untracked(&self) -> String {
        self.state.current_value_untracked()
    }

    /// Shared change function.
    pub fn change_value(&self, value: Option<String>) {
        self.state.change_value(value);
    }

    /// Current registry snapshot.
    pub fn options(&self) -> OptionRegistry {
        self.options.get()
    }

    /// Registered label for `value`.
    pub fn label_for(&self, value: &str) -> Option<String> {
        self.options
            .with(|options| options.label(value).map(str::to_string))
    }

    /// Select-wide disabled flag, tracked.
    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Select-wide disabled flag as a signal.
    pub fn disabled_signal(&self) -> Signal<bool> {
        self.disabled
    }

    /// Whether the popup reports itself open.
    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    /// Trigger activation. Requests the popup to open unless the select or
    /// `disabled_override` is disabled; returns whether a request was sent.
    pub fn activate_trigger(&self, disabled_override: bool) -> bool {
        if disabled_override || self.disabled.get_untracked() {
            return false;
        }
        self.popup.open();
        true
    }

    /// Option activation: change the value, then close the popup.
    ///
    /// Deliberately not gated on the disabled flag; the trigger is the guard.
    pub fn activate_option(&self, value: Option<String>) {
        self.state.change_value(value);
        self.popup.close();
    }

    /// Resolves the value display for this select.
    pub fn resolve_display(
        &self,
        content: Option<&ViewFn>,
        placeholder: Option<&str>,
    ) -> SelectDisplay {
        let value = self.value();
        self.options
            .with(|options| resolve_display(options, &value, content, placeholder))
    }
}

pub(crate) fn expect_select(
    explicit: Option<SelectContext>,
    component: &'static str,
) -> SelectContext {
    match SelectContext::resolve(explicit, component) {
        Ok(select) => select,
        Err(err) => panic!("{err}"),
    }
}
