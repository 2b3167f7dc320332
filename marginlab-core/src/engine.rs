//! Margin engine — one arithmetic pass from raw inputs to derived values.

use crate::parse::parse_amount;

/// Snapshot of everything the user can edit.
///
/// The view owns one of these and mutates it on every keystroke/toggle; the
/// engine only ever sees it as an immutable borrow. Text fields are free-form
/// and unvalidated, the parser absorbs whatever is in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputs {
    pub sale_total: String,
    pub order_cost: String,
    pub freight_cost: String,
    pub include_freight: bool,
    /// Warn when freight reaches this share of the sale, in percent points.
    pub warn_threshold: String,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            sale_total: "3798".into(),
            order_cost: "2530".into(),
            freight_cost: "50".into(),
            include_freight: true,
            warn_threshold: "8".into(),
        }
    }
}

/// Derived values for one snapshot of the inputs.
///
/// A pure projection: recomputed whenever any input changes and discarded on
/// the next recomputation. `margin` and `freight_pct` are `NaN` when the sale
/// total is not positive — an undefined metric, not an error and not zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginResult {
    pub sale: f64,
    pub cost: f64,
    pub freight: f64,
    pub cost_after_freight: f64,
    pub gross_profit: f64,
    pub margin: f64,
    pub freight_pct: f64,
    /// Warn threshold as a fraction (user enters percent points).
    pub warn_threshold: f64,
}

/// Compute the margin breakdown for a snapshot of the inputs.
///
/// Freight participates in cost only when `include_freight` is set; the
/// toggle is a term in the formula, not a separate path. The threshold is
/// clamped at zero below but deliberately uncapped above 100%.
pub fn compute(inputs: &RawInputs) -> MarginResult {
    let sale = parse_amount(&inputs.sale_total);
    let cost = parse_amount(&inputs.order_cost);
    let freight = parse_amount(&inputs.freight_cost);
    let warn_threshold = parse_amount(&inputs.warn_threshold).max(0.0) / 100.0;

    let cost_after_freight = cost + if inputs.include_freight { freight } else { 0.0 };
    let gross_profit = sale - cost_after_freight;
    let margin = if sale > 0.0 { gross_profit / sale } else { f64::NAN };
    let freight_pct = if sale > 0.0 { freight / sale } else { f64::NAN };

    MarginResult {
        sale,
        cost,
        freight,
        cost_after_freight,
        gross_profit,
        margin,
        freight_pct,
        warn_threshold,
    }
}
