//! Clipboard summary — the one-line human-readable export.

use crate::engine::MarginResult;
use crate::format::{currency, percent};

/// Build the single-line summary written to the clipboard.
///
/// The cost label carries `+Freight` only when freight is part of the cost,
/// so a pasted line is self-describing about what the figure includes.
pub fn summary_line(result: &MarginResult, include_freight: bool) -> String {
    let cost_label = if include_freight { "Cost+Freight" } else { "Cost" };
    format!(
        "Sale: {} | {}: {} | Profit: {} | Margin: {}",
        currency(result.sale),
        cost_label,
        currency(result.cost_after_freight),
        currency(result.gross_profit),
        percent(result.margin),
    )
}
