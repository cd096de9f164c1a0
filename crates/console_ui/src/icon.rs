//! Centralized icon API for shared primitives.
//!
//! Icons are inline SVG paths keyed by [`IconName`]. They carry no state and are purely
//! decorative (`aria-hidden`).

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons available to shared primitives.
pub enum IconName {
    /// Downward chevron used as the select trigger affordance.
    ChevronDown,
    /// Check mark for the currently selected option.
    Check,
}

impl IconName {
    fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::Check => "check",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::ChevronDown => "M4 6l4 4 4-4",
            Self::Check => "M3 8.5l3 3 7-7",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px glyph.
    Sm,
    /// 16px glyph.
    Md,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    fn px(self) -> u8 {
        match self {
            Self::Sm => 12,
            Self::Md => 16,
        }
    }
}

#[component]
/// Decorative inline SVG icon.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            width=px
            height=px
            viewBox="0 0 16 16"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-icon=icon.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_tokens_are_kebab_case() {
        assert_eq!(IconName::ChevronDown.token(), "chevron-down");
        assert_eq!(IconName::Check.token(), "check");
        assert_eq!(IconSize::default().px(), 16);
    }
}
