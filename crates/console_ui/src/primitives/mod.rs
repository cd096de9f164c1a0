//! Shared control, overlay, and field primitives the console composes.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod overlays;

pub use controls::{Button, FieldGroup};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Quiet style used inside menus and lists.
    Quiet,
    /// Field-like button used for pickers.
    Field,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Field => "field",
        }
    }
}

pub(crate) fn merge_layout_class(
    base: &'static str,
    layout_class: Option<&'static str>,
) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("orders-filter")),
            "ui-button orders-filter"
        );
    }

    #[test]
    fn tokens_match_dom_contract() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
        assert_eq!(ButtonVariant::Quiet.token(), "quiet");
        assert_eq!(ButtonVariant::Field.token(), "field");
    }
}
