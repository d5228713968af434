//! Rendering of the four report lines from an aggregator's statistics.

use crate::aggregate::Aggregator;

/// Fallback line for the two sale-derived statistics of a cycle without sales.
pub const NO_SALES_FOUND: &str = "No sales have been found";

/// Renders the report in its fixed order: client count, salesperson
/// count, most expensive sale, worst salesperson. Always four lines.
pub fn render(aggregator: &Aggregator) -> Vec<String> {
    let most_expensive = match aggregator.most_expensive_sale() {
        Some(item) => format!(
            "Most expensive sale with price {} has ID {}",
            item.price, item.id
        ),
        None => NO_SALES_FOUND.to_string(),
    };
    let worst = match aggregator.worst_salesperson() {
        Some((name, count)) => format!("Shame on {} who performed only {} sales!", name, count),
        None => NO_SALES_FOUND.to_string(),
    };

    vec![
        format!("Amount of clients found: {}", aggregator.client_count()),
        format!("Amount of salesmen found: {}", aggregator.salesperson_count()),
        most_expensive,
        worst,
    ]
}
