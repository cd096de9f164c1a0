//! Mock order rows for the orders panel.

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the orders table.
pub struct OrderRow {
    /// Display order number.
    pub id: &'static str,
    /// Customer display name.
    pub customer: &'static str,
    /// Fulfilment status value, matching the `order_status` option set.
    pub status: &'static str,
    /// Order total in cents.
    pub total_cents: u64,
}

/// Fixed sample orders.
pub fn mock_orders() -> Vec<OrderRow> {
    vec![
        OrderRow {
            id: "#1042",
            customer: "Ada Moreno",
            status: "paid",
            total_cents: 12_950,
        },
        OrderRow {
            id: "#1043",
            customer: "Kenji Watanabe",
            status: "shipped",
            total_cents: 4_500,
        },
        OrderRow {
            id: "#1044",
            customer: "Priya Raman",
            status: "pending",
            total_cents: 89_999,
        },
        OrderRow {
            id: "#1045",
            customer: "Tomas Lind",
            status: "paid",
            total_cents: 2_005,
        },
    ]
}

/// Rows matching `status`; the empty filter keeps every row.
pub fn filter_by_status<'a>(orders: &'a [OrderRow], status: &str) -> Vec<&'a OrderRow> {
    orders
        .iter()
        .filter(|order| status.is_empty() || order.status == status)
        .collect()
}

/// Formats cents as a dollar amount with two decimals.
pub fn format_total(total_cents: u64) -> String {
    format!("${}.{:02}", total_cents / 100, total_cents % 100)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_filter_keeps_all_rows() {
        let orders = mock_orders();
        assert_eq!(filter_by_status(&orders, "").len(), orders.len());
    }

    #[test]
    fn status_filter_keeps_matching_rows_in_order() {
        let orders = mock_orders();
        let ids: Vec<_> = filter_by_status(&orders, "paid")
            .into_iter()
            .map(|order| order.id)
            .collect();
        assert_eq!(ids, vec!["#1042", "#1045"]);
        assert!(filter_by_status(&orders, "refunded").is_empty());
    }

    #[test]
    fn totals_render_as_dollars() {
        assert_eq!(format_total(12_950), "$129.50");
        assert_eq!(format_total(2_005), "$20.05");
        assert_eq!(format_total(0), "$0.00");
    }
}
