//! Administrative console surface for orders, marketing, and settings.
//!
//! Every picker on these panels is a `console_ui` [`Select`]. The orders filter is
//! controlled by panel state, the marketing pickers own their values, and the settings
//! currency picker shows the disabled path.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod orders;

use console_ui::prelude::*;
use leptos::*;

pub use config::{ConfigError, ConsoleOptionSets};
pub use orders::{filter_by_status, format_total, mock_orders, OrderRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Console sections, one route each.
pub enum ConsoleSection {
    /// Order list with a status filter.
    Orders,
    /// Campaign setup.
    Marketing,
    /// Store settings.
    Settings,
}

impl ConsoleSection {
    /// Sections in navigation order.
    pub const ALL: [Self; 3] = [Self::Orders, Self::Marketing, Self::Settings];

    /// Heading shown above the section.
    pub fn label(self) -> &'static str {
        match self {
            Self::Orders => "Orders",
            Self::Marketing => "Marketing",
            Self::Settings => "Settings",
        }
    }

    /// Route path segment.
    pub fn path(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Marketing => "marketing",
            Self::Settings => "settings",
        }
    }

    /// Absolute route for links and redirects.
    pub fn href(self) -> String {
        format!("/{}", self.path())
    }
}

/// Summary line for the orders filter.
pub fn status_summary(status_label: Option<&str>, shown: usize, total: usize) -> String {
    match status_label {
        Some(label) => format!("{shown} of {total} orders are {label}"),
        None => format!("Showing all {total} orders"),
    }
}

fn load_option_sets() -> ConsoleOptionSets {
    match ConsoleOptionSets::embedded() {
        Ok(sets) => sets,
        Err(err) => {
            logging::warn!("console option sets unavailable: {err}");
            ConsoleOptionSets::default()
        }
    }
}

#[component]
/// Console window contents for one section.
pub fn ConsoleShowcase(
    /// Section to render.
    section: ConsoleSection,
) -> impl IntoView {
    let options = load_option_sets();
    let body = match section {
        ConsoleSection::Orders => {
            view! { <OrdersPanel options=options.order_status /> }.into_view()
        }
        ConsoleSection::Marketing => view! {
            <MarketingPanel
                channels=options.marketing_channel
                campaign_types=options.campaign_type
            />
        }
        .into_view(),
        ConsoleSection::Settings => view! {
            <SettingsPanel regions=options.region currencies=options.currency />
        }
        .into_view(),
    };

    view! {
        <section class="console-section" data-console-section=section.path()>
            <h1>{section.label()}</h1>
            {body}
        </section>
    }
}

#[component]
fn OrdersPanel(options: Vec<SelectOptionSpec>) -> impl IntoView {
    let status = create_rw_signal(String::new());
    let orders = store_value(mock_orders());
    let tree = SelectTree::builder()
        .trigger(
            TriggerDecl::new()
                .aria_label("Filter by status")
                .value(ValueDecl::placeholder("Any status")),
        )
        .content(|content| {
            content
                .aria_label("Order status")
                .option(SelectOptionSpec::new("", "Any status"))
                .separator()
                .label("Fulfilment")
                .items(options.clone())
        })
        .build();
    let labels = OptionRegistry::derive(&tree);

    let summary = move || {
        let status = status.get();
        orders.with_value(|orders| {
            let shown = filter_by_status(orders, &status).len();
            let label = if status.is_empty() {
                None
            } else {
                labels.label(&status)
            };
            status_summary(label, shown, orders.len())
        })
    };
    let rows = move || {
        let status = status.get();
        orders.with_value(|orders| {
            filter_by_status(orders, &status)
                .into_iter()
                .map(|order| {
                    view! {
                        <tr>
                            <td>{order.id}</td>
                            <td>{order.customer}</td>
                            <td>{order.status}</td>
                            <td>{format_total(order.total_cents)}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <FieldGroup title="Status" description="Only orders in this state are listed.">
            <Select
                tree
                value=status
                on_value_change=Callback::new(move |next: Option<String>| {
                    status.set(next.unwrap_or_default());
                })
                ui_slot="orders-status"
            />
        </FieldGroup>
        <p data-console-slot="summary">{summary}</p>
        <table class="console-orders">
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn MarketingPanel(
    channels: Vec<SelectOptionSpec>,
    campaign_types: Vec<SelectOptionSpec>,
) -> impl IntoView {
    let default_channel = channels
        .first()
        .and_then(|option| option.value.clone())
        .unwrap_or_default();
    let last_channel = create_rw_signal::<Option<String>>(None);

    let channel_tree = SelectTree::builder()
        .trigger(TriggerDecl::new().aria_label("Channel").value(ValueDecl::default()))
        .content(|content| content.items(channels))
        .other(|| {
            view! {
                <small data-console-slot="channel-echo">
                    "Sending via " <SelectValue />
                </small>
            }
        })
        .build();
    let campaign_tree =
        SelectTree::from_options(Some("Choose a template".to_string()), campaign_types);

    view! {
        <FieldGroup title="Channel" description="Where the campaign is delivered.">
            <Select
                tree=channel_tree
                default_value=default_channel
                on_value_change=Callback::new(move |next: Option<String>| last_channel.set(next))
            />
        </FieldGroup>
        <FieldGroup title="Campaign type">
            <Select tree=campaign_tree />
        </FieldGroup>
        <p data-console-slot="last-change">
            {move || match last_channel.get() {
                Some(channel) => format!("Channel changed to {channel}"),
                None => "Channel unchanged".to_string(),
            }}
        </p>
    }
}

#[component]
fn SettingsPanel(
    regions: Vec<SelectOptionSpec>,
    currencies: Vec<SelectOptionSpec>,
) -> impl IntoView {
    let region_tree = SelectTree::from_options(Some("Pick a region".to_string()), regions);
    let currency_tree = SelectTree::from_options(None, currencies);

    view! {
        <FieldGroup title="Region" description="Determines tax rules and shipping zones.">
            <Select tree=region_tree />
        </FieldGroup>
        <FieldGroup title="Currency" description="Locked after the first payout.">
            <Select tree=currency_tree default_value="usd" disabled=true />
        </FieldGroup>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn summary_names_the_selected_status() {
        assert_eq!(status_summary(Some("Paid"), 2, 4), "2 of 4 orders are Paid");
        assert_eq!(status_summary(None, 4, 4), "Showing all 4 orders");
    }

    #[test]
    fn sections_have_distinct_paths() {
        let paths = ConsoleSection::ALL.map(ConsoleSection::path);
        assert_eq!(paths, ["orders", "marketing", "settings"]);
        assert_eq!(ConsoleSection::Marketing.href(), "/marketing");
        assert_eq!(ConsoleSection::Settings.label(), "Settings");
    }

    #[test]
    fn orders_filter_registers_the_any_sentinel() {
        let sets = ConsoleOptionSets::embedded().expect("embedded options");
        let tree = SelectTree::builder()
            .content(|content| {
                content
                    .option(SelectOptionSpec::new("", "Any status"))
                    .items(sets.order_status.clone())
            })
            .build();
        let registry = OptionRegistry::derive(&tree);
        assert_eq!(registry.label(""), Some("Any status"));
        assert_eq!(registry.len(), sets.order_status.len() + 1);
    }
}
