//! Scenario tests for the margin engine and its presentation layer.

use marginlab_core::{
    compute, currency, freight_high, is_negative, percent, pill_tone, summary_line, PillTone,
    RawInputs, PLACEHOLDER,
};

fn scenario(sale: &str, cost: &str, freight: &str, include: bool, threshold: &str) -> RawInputs {
    RawInputs {
        sale_total: sale.into(),
        order_cost: cost.into(),
        freight_cost: freight.into(),
        include_freight: include,
        warn_threshold: threshold.into(),
    }
}

#[test]
fn reference_scenario_with_freight() {
    let r = compute(&scenario("31191", "19912", "1427", true, "8"));
    assert_eq!(r.cost_after_freight, 21339.0);
    assert_eq!(r.gross_profit, 9852.0);
    assert_eq!(percent(r.margin), "31.59%");
    assert_eq!(percent(r.freight_pct), "4.58%");
}

#[test]
fn reference_scenario_without_freight() {
    let r = compute(&scenario("31191", "19912", "1427", false, "8"));
    assert_eq!(r.cost_after_freight, 19912.0);
    assert_eq!(r.gross_profit, 11279.0);
    assert_eq!(percent(r.margin), "36.16%");
}

#[test]
fn zero_sale_displays_placeholders_regardless_of_costs() {
    for (cost, freight) in [("0", "0"), ("500", "20"), ("abc", "$1,000")] {
        let r = compute(&scenario("0", cost, freight, true, "8"));
        assert_eq!(percent(r.margin), PLACEHOLDER);
        assert_eq!(percent(r.freight_pct), PLACEHOLDER);
    }
}

#[test]
fn decorated_input_text_parses_like_plain() {
    let plain = compute(&scenario("31191", "19912", "1427", true, "8"));
    let decorated = compute(&scenario(" $31,191 ", "$19,912", " 1,427", true, "8"));
    assert_eq!(plain, decorated);
}

#[test]
fn freight_below_threshold_does_not_warn() {
    let r = compute(&scenario("31191", "19912", "1427", true, "8"));
    assert!(!freight_high(&r));
}

#[test]
fn freight_at_and_above_threshold_warns() {
    // Exactly at the threshold counts as high (inclusive comparison).
    let at = compute(&scenario("100", "50", "8", true, "8"));
    assert!(freight_high(&at));
    let above = compute(&scenario("31191", "19912", "1427", true, "4"));
    assert!(freight_high(&above));
}

#[test]
fn negative_margin_classifies_bad() {
    let r = compute(&scenario("100", "120", "0", true, "8"));
    assert!(is_negative(&r));
    assert_eq!(pill_tone(&r), PillTone::Bad);
}

#[test]
fn healthy_margin_classifies_good() {
    let r = compute(&scenario("31191", "19912", "1427", true, "8"));
    assert_eq!(pill_tone(&r), PillTone::Good);
}

#[test]
fn thin_margin_classifies_neutral() {
    let r = compute(&scenario("100", "80", "0", true, "8"));
    assert_eq!(pill_tone(&r), PillTone::Neutral);
}

#[test]
fn undefined_margin_classifies_neutral_not_negative() {
    let r = compute(&scenario("", "120", "0", true, "8"));
    assert!(!is_negative(&r));
    assert_eq!(pill_tone(&r), PillTone::Neutral);
}

#[test]
fn summary_line_reference_scenario() {
    let r = compute(&scenario("31191", "19912", "1427", true, "8"));
    assert_eq!(
        summary_line(&r, true),
        "Sale: $31,191.00 | Cost+Freight: $21,339.00 | Profit: $9,852.00 | Margin: 31.59%"
    );
}

#[test]
fn currency_formatting_reference_values() {
    assert_eq!(currency(31191.0), "$31,191.00");
    assert_eq!(currency(21339.0), "$21,339.00");
    assert_eq!(currency(9852.0), "$9,852.00");
}
