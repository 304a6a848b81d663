//! Display formatting for forecast table cells.

/// Columns of the forecast table in display order.
pub const DISPLAY_COLUMNS: [&str; 8] = [
    "lat", "lon", "time", "week1", "week2", "week3", "week4", "later",
];

/// Columns holding probabilities, which are shown with two decimals.
pub const PROBABILITY_COLUMNS: [&str; 5] = ["week1", "week2", "week3", "week4", "later"];

/// Whether a column is formatted as a probability.
pub fn is_probability_column(column: &str) -> bool {
    PROBABILITY_COLUMNS.contains(&column)
}

/// Format a raw probability cell for display.
///
/// A cell that starts with a number is shown with exactly two decimals,
/// ignoring any trailing text (`0.6%` shows as `0.60`). Anything else
/// (empty cells, placeholders like `n/a`) is returned unchanged.
pub fn format_probability(raw: &str) -> String {
    match parse_leading_number(raw) {
        Some(value) => format_fixed(value),
        None => raw.to_string(),
    }
}

/// Format an already-decoded probability, empty when absent.
pub fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_fixed(v),
        _ => String::new(),
    }
}

/// Format a number with two decimals, rounding exact halves away from zero.
///
/// Non-finite values are spelled `Infinity`, `-Infinity` and `NaN`.
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    // Drop the sign of negative zero.
    let value = if value == 0.0 { 0.0 } else { value };

    // `{:.2}` rounds on the exact binary value, halves to even. The only
    // exact halves at two decimals are odd multiples of 1/8, and for those
    // `value * 100.0` is exact, so `round` settles them away from zero.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}

/// Parse the longest numeric prefix of a cell, after leading whitespace.
///
/// Accepts an optional sign, then `Infinity` or a decimal with optional
/// fraction and exponent. An exponent without digits is not consumed, so
/// `1e` reads as `1`. Returns `None` when no digits lead the text.
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Format a cell for the given column: probabilities get two decimals,
/// every other column is shown verbatim.
pub fn format_cell(column: &str, raw: &str) -> String {
    if is_probability_column(column) {
        format_probability(raw)
    } else {
        raw.to_string()
    }
}
