//! Single-choice select compound control.
//!
//! A [`Select`] owns one [`SelectionState`] (controlled or uncontrolled), derives an
//! [`OptionRegistry`] from its [`SelectTree`], and threads a [`SelectContext`] to the
//! trigger, value display, and option primitives. Open/closed state belongs to a
//! [`PopupController`]; the select only requests transitions.
//!
//! ```ignore
//! let tree = SelectTree::builder()
//!     .trigger(TriggerDecl::new().value(ValueDecl::placeholder("Pick a region")))
//!     .content(|content| content.item("east", "Eastern").item("west", "Western"))
//!     .build();
//!
//! view! { <Select tree default_value="east" /> }
//! ```

mod components;
mod context;
mod error;
mod popup;
mod registry;
mod state;

pub use components::{
    Select, SelectContent, SelectItem, SelectLabel, SelectSeparator, SelectTrigger, SelectValue,
};
pub use context::{resolve_display, SelectContext, SelectDisplay};
pub use error::SelectError;
pub use popup::{PopupController, PopupState};
pub use registry::{
    memoized_registry, ContentBuilder, ContentDecl, ContentNode, OptionRegistry, SelectNode,
    SelectOptionSpec, SelectTree, SelectTreeBuilder, TriggerDecl, ValueDecl,
};
pub use state::{SelectionMode, SelectionState};
