//! Property tests for parser and engine invariants.
//!
//! Uses proptest to verify:
//! 1. Parser totality — any text parses to a finite number, never a panic
//! 2. Margin sign agreement — margin < 0 exactly when gross profit < 0
//! 3. Freight toggle identity — excluding freight removes exactly one term
//! 4. Formatter totality — currency/percent are defined for every f64

use proptest::prelude::*;

use marginlab_core::{compute, currency, is_negative, parse_amount, percent, RawInputs};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_amount_text() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plausible typing: digits with optional decoration
        (0.0..1_000_000.0_f64).prop_map(|n| format!("{n:.2}")),
        (0u64..10_000_000).prop_map(|n| format!("${n}")),
        (0u64..10_000).prop_map(|n| format!(" {n},000 ")),
        // Arbitrary garbage
        "\\PC*",
    ]
}

fn arb_inputs() -> impl Strategy<Value = RawInputs> {
    (
        arb_amount_text(),
        arb_amount_text(),
        arb_amount_text(),
        any::<bool>(),
        arb_amount_text(),
    )
        .prop_map(|(sale, cost, freight, include, threshold)| RawInputs {
            sale_total: sale,
            order_cost: cost,
            freight_cost: freight,
            include_freight: include,
            warn_threshold: threshold,
        })
}

// ── 1. Parser totality ───────────────────────────────────────────────

proptest! {
    /// Any text at all parses to a finite number.
    #[test]
    fn parse_is_total_and_finite(text in "\\PC*") {
        let n = parse_amount(&text);
        prop_assert!(n.is_finite());
    }

    /// Decorating a plain number with `$`, commas, and padding never changes it.
    #[test]
    fn parse_ignores_decoration(n in 0u64..1_000_000_000) {
        let plain = parse_amount(&n.to_string());
        let decorated = parse_amount(&format!("  ${n} "));
        prop_assert_eq!(plain, decorated);
    }
}

// ── 2. Margin sign agreement ─────────────────────────────────────────

proptest! {
    /// For a positive sale, the negative flag tracks the gross profit sign.
    #[test]
    fn margin_sign_matches_profit_sign(
        sale in 1.0..1_000_000.0_f64,
        cost in 0.0..1_000_000.0_f64,
        freight in 0.0..10_000.0_f64,
        include in any::<bool>(),
    ) {
        let inputs = RawInputs {
            sale_total: format!("{sale:.2}"),
            order_cost: format!("{cost:.2}"),
            freight_cost: format!("{freight:.2}"),
            include_freight: include,
            warn_threshold: "8".into(),
        };
        let r = compute(&inputs);
        prop_assert!(r.margin.is_finite());
        prop_assert_eq!(is_negative(&r), r.gross_profit < 0.0);
    }
}

// ── 3. Freight toggle identity ───────────────────────────────────────

proptest! {
    /// Toggling freight off removes exactly the freight term from cost, and
    /// never touches the parsed figures themselves.
    #[test]
    fn toggle_removes_exactly_the_freight_term(inputs in arb_inputs()) {
        let with = compute(&RawInputs { include_freight: true, ..inputs.clone() });
        let without = compute(&RawInputs { include_freight: false, ..inputs });
        prop_assert_eq!(with.sale, without.sale);
        prop_assert_eq!(with.freight, without.freight);
        prop_assert!((with.cost_after_freight - (without.cost_after_freight + with.freight)).abs() < 1e-6);
        prop_assert!((without.gross_profit - (with.gross_profit + with.freight)).abs() < 1e-6);
    }
}

// ── 4. Formatter totality ────────────────────────────────────────────

proptest! {
    /// Formatters accept every f64, including NaN and infinities.
    #[test]
    fn formatters_are_total(bits in any::<u64>()) {
        let n = f64::from_bits(bits);
        let c = currency(n);
        let p = percent(n);
        prop_assert!(!c.contains("NaN"));
        prop_assert!(!p.contains("NaN"));
        prop_assert!(!c.is_empty());
        prop_assert!(!p.is_empty());
    }
}
