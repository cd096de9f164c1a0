mod web_app;

use console_showcase::ConsoleSection;

pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}

/// One `href  label` line per console section, in navigation order.
pub fn route_table() -> Vec<String> {
    ConsoleSection::ALL
        .into_iter()
        .map(|section| format!("{:<12}{}", section.href(), section.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_lists_every_section_in_order() {
        assert_eq!(
            route_table(),
            vec![
                "/orders     Orders".to_string(),
                "/marketing  Marketing".to_string(),
                "/settings   Settings".to_string(),
            ]
        );
    }
}
