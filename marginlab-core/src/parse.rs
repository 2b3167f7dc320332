//! Tolerant amount parsing — arbitrary user text in, finite number out.

/// Parse free-form amount text into a finite `f64`.
///
/// Strips `$`, `,`, and all whitespace, then parses the remainder as a
/// decimal. Empty text, garbage, and non-finite results (`NaN`, `inf`) all
/// yield `0.0`. The UI re-runs the engine on every keystroke, so half-typed
/// values must coerce to something displayable rather than error.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_garbage_yield_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12abc"), 0.0);
        assert_eq!(parse_amount("--5"), 0.0);
    }

    #[test]
    fn currency_decorations_are_stripped() {
        assert_eq!(parse_amount("$3,798"), 3798.0);
        assert_eq!(parse_amount("  50 "), 50.0);
        assert_eq!(parse_amount("$ 1,234,567.89"), 1_234_567.89);
    }

    #[test]
    fn signs_and_decimals_pass_through() {
        assert_eq!(parse_amount("-12.5"), -12.5);
        assert_eq!(parse_amount("+7"), 7.0);
        assert_eq!(parse_amount(".5"), 0.5);
    }

    #[test]
    fn non_finite_spellings_yield_zero() {
        // f64::from_str accepts these; the contract does not.
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-infinity"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }
}
