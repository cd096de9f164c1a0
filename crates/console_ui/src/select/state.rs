//! Value ownership for a select: caller-owned (controlled) or self-owned (uncontrolled).

use leptos::*;

#[derive(Clone, Copy)]
/// Who owns the current value. Fixed for the lifetime of the select.
pub enum SelectionMode {
    /// The caller's signal is authoritative.
    Controlled(Signal<String>),
    /// The select owns the value, seeded once from the default.
    Uncontrolled(RwSignal<String>),
}

#[derive(Clone, Copy)]
/// Authoritative current value plus the single change entry point.
pub struct SelectionState {
    mode: SelectionMode,
    on_value_change: Option<Callback<Option<String>>>,
}

impl SelectionState {
    /// Decides the mode once: controlled iff `value` is supplied, even when it is empty.
    ///
    /// `default_value` seeds uncontrolled state and is ignored in controlled mode.
    pub fn new(
        value: Option<MaybeSignal<String>>,
        on_value_change: Option<Callback<Option<String>>>,
        default_value: Option<String>,
    ) -> Self {
        let mode = match value {
            Some(value) => SelectionMode::Controlled(Signal::derive(move || value.get())),
            None => {
                SelectionMode::Uncontrolled(create_rw_signal(default_value.unwrap_or_default()))
            }
        };
        Self {
            mode,
            on_value_change,
        }
    }

    /// Current ownership mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Whether the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, SelectionMode::Controlled(_))
    }

    /// Current value, tracked. Empty means nothing is selected.
    pub fn current_value(&self) -> String {
        match self.mode {
            SelectionMode::Controlled(value) => value.get(),
            SelectionMode::Uncontrolled(value) => value.get(),
        }
    }

    /// Current value without subscribing.
    pub fn current_value_untracked(&self) -> String {
        match self.mode {
            SelectionMode::Controlled(value) => value.get_untracked(),
            SelectionMode::Uncontrolled(value) => value.get_untracked(),
        }
    }

    /// Read-only view of the authoritative value.
    pub fn value_signal(&self) -> Signal<String> {
        match self.mode {
            SelectionMode::Controlled(value) => value,
            SelectionMode::Uncontrolled(value) => value.into(),
        }
    }

    /// Applies a new value and notifies the caller.
    ///
    /// Uncontrolled state is written before the callback runs; a missing value is stored as
    /// the empty sentinel but forwarded to the caller as `None`. The callback fires on
    /// every call, including repeats of the current value.
    pub fn change_value(&self, value: Option<String>) {
        if let SelectionMode::Uncontrolled(internal) = self.mode {
            internal.set(value.clone().unwrap_or_default());
        }
        if let Some(on_value_change) = self.on_value_change {
            on_value_change.call(value);
        }
    }
}
