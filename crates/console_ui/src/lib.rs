//! Shared UI primitive library for the administrative console.
//!
//! The crate owns reusable Leptos primitives, a small icon API, and the stable
//! `data-ui-*` DOM contract consumed by the console stylesheet. The centerpiece is the
//! [`Select`] compound control: a single-choice picker assembled from a typed
//! declaration tree ([`SelectTree`]) whose trigger, value display, and option list
//! share one [`SelectContext`].
//!
//! Console panels should compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
pub mod select;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{Button, ButtonVariant, FieldGroup, MenuItem, MenuSeparator, MenuSurface};
pub use select::{
    ContentBuilder, ContentDecl, ContentNode, OptionRegistry, PopupController, PopupState, Select,
    SelectContent, SelectContext, SelectDisplay, SelectError, SelectItem, SelectLabel, SelectNode,
    SelectOptionSpec, SelectSeparator, SelectTree, SelectTreeBuilder, SelectTrigger, SelectValue,
    SelectionMode, SelectionState, TriggerDecl, ValueDecl,
};

/// Convenience imports for console crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, FieldGroup, Icon, IconName, IconSize, MenuItem, MenuSeparator,
        MenuSurface, OptionRegistry, PopupController, PopupState, Select, SelectContent,
        SelectContext, SelectDisplay, SelectItem, SelectLabel, SelectOptionSpec, SelectSeparator,
        SelectTree, SelectTrigger, SelectValue, TriggerDecl, ValueDecl,
    };
}
