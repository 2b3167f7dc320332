//! Display formatting — currency and percent, total over every input.

/// Shown wherever a metric is undefined (e.g. margin with a zero sale).
pub const PLACEHOLDER: &str = "—";

/// Format an amount as USD with thousands grouping and two decimals.
///
/// Negative amounts render as `-$12.34`. Non-finite input renders the
/// placeholder rather than `$NaN`.
pub fn currency(n: f64) -> String {
    if !n.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let cents = (n.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    let rem = cents % 100;
    if n.is_sign_negative() && cents > 0 {
        format!("-${dollars}.{rem:02}")
    } else {
        format!("${dollars}.{rem:02}")
    }
}

/// Format a fraction as a percentage with two decimals (`0.3159` → `31.59%`).
///
/// Non-finite input renders the placeholder rather than `NaN%`.
pub fn percent(n: f64) -> String {
    if !n.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.2}%", n * 100.0)
}

fn group_thousands(mut n: u64) -> String {
    let mut groups: Vec<String> = Vec::new();
    loop {
        let chunk = n % 1000;
        n /= 1000;
        if n == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{chunk:03}"));
    }
    groups.reverse();
    groups.join(",")
}
