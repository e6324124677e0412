//! Value formatting — INR currency, market-cap scaling, percentages.
//!
//! `None` always renders as the literal unavailable marker; it is never
//! formatted or coerced. Monetary values use the rupee sign with Indian
//! digit grouping (last three digits, then groups of two).

/// Literal marker for values the provider did not report.
pub const UNAVAILABLE: &str = "N/A";

const RUPEE: char = '\u{20b9}';

/// `₹2,945.10`-style currency with Indian grouping.
pub fn currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{RUPEE}{}", group_indian(v)),
        None => UNAVAILABLE.to_string(),
    }
}

/// Market cap scaled to trillions or billions, else plain currency.
pub fn market_cap(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 1e12 => format!("{RUPEE}{:.2}T", v / 1e12),
        Some(v) if v >= 1e9 => format!("{RUPEE}{:.2}B", v / 1e9),
        other => currency(other),
    }
}

/// Plain two-decimal number (P/E, EPS).
pub fn number(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => UNAVAILABLE.to_string(),
    }
}

/// Ratio shown as a percentage (`0.0123` → `1.23%`).
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => UNAVAILABLE.to_string(),
    }
}

/// Two-decimal rendering of an indicator sample; NaN means the value is
/// undefined for insufficient history.
pub fn series_value(value: f64) -> String {
    if value.is_nan() {
        UNAVAILABLE.to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Indian-style digit grouping with two decimals: `5,00,000.00`.
fn group_indian(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let s = format!("{:.2}", value.abs());
    // "{:.2}" always produces ".xx" at the end.
    let dot = s.len() - 3;
    let int_digits = &s[..dot];
    let frac = &s[dot..];

    let n = int_digits.len();
    if n <= 3 {
        return format!("{sign}{int_digits}{frac}");
    }

    let head = &int_digits[..n - 3];
    let tail = &int_digits[n - 3..];
    let mut parts: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        parts.push(&head[i - 2..i]);
        i -= 2;
    }
    parts.push(&head[..i]);
    parts.reverse();

    format!("{sign}{},{tail}{frac}", parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_cap_scales_to_trillions() {
        assert_eq!(market_cap(Some(1.5e12)), "\u{20b9}1.50T");
    }

    #[test]
    fn market_cap_scales_to_billions() {
        assert_eq!(market_cap(Some(2.3e9)), "\u{20b9}2.30B");
    }

    #[test]
    fn market_cap_below_a_billion_is_grouped_currency() {
        assert_eq!(market_cap(Some(500_000.0)), "\u{20b9}5,00,000.00");
    }

    #[test]
    fn market_cap_unavailable_passes_through() {
        assert_eq!(market_cap(None), "N/A");
    }

    #[test]
    fn dividend_yield_formatting() {
        assert_eq!(percent(Some(0.0123)), "1.23%");
        assert_eq!(percent(None), "N/A");
    }

    #[test]
    fn currency_grouping_examples() {
        assert_eq!(currency(Some(0.0)), "\u{20b9}0.00");
        assert_eq!(currency(Some(999.99)), "\u{20b9}999.99");
        assert_eq!(currency(Some(1_000.0)), "\u{20b9}1,000.00");
        assert_eq!(currency(Some(12_345.6)), "\u{20b9}12,345.60");
        assert_eq!(currency(Some(1_234_567.0)), "\u{20b9}12,34,567.00");
        assert_eq!(currency(Some(123_456_789.0)), "\u{20b9}12,34,56,789.00");
    }

    #[test]
    fn negative_values_keep_the_sign_outside_grouping() {
        assert_eq!(currency(Some(-1_234_567.0)), "\u{20b9}-12,34,567.00");
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(number(Some(24.456)), "24.46");
        assert_eq!(number(None), "N/A");
    }

    #[test]
    fn nan_series_value_is_unavailable() {
        assert_eq!(series_value(f64::NAN), "N/A");
        assert_eq!(series_value(56.345), "56.35");
    }
}
