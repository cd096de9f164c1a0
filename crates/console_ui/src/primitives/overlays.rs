use super::*;

#[component]
/// Shared overlay surface for menus, listboxes, and popups.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional_no_strip)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared overlay menu item primitive.
///
/// `aria_disabled` only marks the item; activation still reaches `on_click`.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_selected: MaybeSignal<String>,
    #[prop(optional, into)] aria_disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role=role.unwrap_or_default()
            aria_selected=aria_selected
            aria_disabled=Signal::derive(move || bool_token(aria_disabled.get()).to_string())
            selected=selected
            ui_slot="menu-item"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Shared overlay menu separator.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}
