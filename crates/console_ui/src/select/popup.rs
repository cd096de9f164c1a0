//! Seam to the popup primitive that owns open/closed state.

use leptos::*;

/// Open/close requests issued by the trigger and options.
///
/// Positioning, outside-click dismissal, and keyboard handling belong to the implementor.
pub trait PopupController {
    /// Requests the popup to open.
    fn open(&self);
    /// Requests the popup to close.
    fn close(&self);
    /// Whether the popup is currently open. Reactive implementations should track.
    fn is_open(&self) -> bool;
}

#[derive(Clone, Copy)]
/// Signal-backed popup used when the caller does not inject one.
pub struct PopupState {
    open: RwSignal<bool>,
}

impl PopupState {
    /// Closed popup.
    pub fn new() -> Self {
        Self {
            open: create_rw_signal(false),
        }
    }

    /// Read-only open flag.
    pub fn open_signal(&self) -> Signal<bool> {
        self.open.into()
    }
}

impl Default for PopupState {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupController for PopupState {
    fn open(&self) {
        self.open.set(true);
    }

    fn close(&self) {
        self.open.set(false);
    }

    fn is_open(&self) -> bool {
        self.open.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_drive_the_signal() {
        let runtime = create_runtime();
        let popup = PopupState::new();
        assert!(!popup.is_open());
        popup.open();
        popup.open();
        assert!(popup.open_signal().get_untracked());
        popup.close();
        assert!(!popup.is_open());
        runtime.dispose();
    }
}
