//! Number formatting for tooltips and axis labels.
//!
//! Values are rounded half away from zero on their exact decimal expansion,
//! so `0.25` shows as `0.3` and `1.45` (stored as 1.4499999...) as `1.4`.
//! A value that rounds to zero never carries a sign.

/// Format a value with a fixed number of decimal places.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let adjusted = if is_exact_tie(value, decimals) {
        value + value.signum() * 0.5 * 10f64.powi(-(decimals as i32))
    } else {
        value
    };

    let formatted = format!("{:.*}", decimals, adjusted);
    match formatted.strip_prefix('-') {
        Some(rest) if is_zero(rest) => rest.to_string(),
        _ => formatted,
    }
}

/// Format a value to one decimal place.
pub fn format_value(value: f64) -> String {
    format_fixed(value, 1)
}

/// Format a value to one decimal place with an explicit `+` when the rounded
/// value is positive.
pub fn format_signed(value: f64) -> String {
    let formatted = format_value(value);
    if formatted.starts_with('-') || is_zero(&formatted) {
        formatted
    } else {
        format!("+{}", formatted)
    }
}

/// Format an axis label with a typographic minus sign (U+2212).
pub fn format_tick(value: f64, decimals: usize) -> String {
    let formatted = format_fixed(value, decimals);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("\u{2212}{}", rest),
        None => formatted,
    }
}

/// Whether the exact decimal value of `value` sits halfway between two
/// representable results. That only happens for `m / 2^(decimals + 1)` with
/// `m` odd.
fn is_exact_tie(value: f64, decimals: usize) -> bool {
    if !value.is_finite() {
        return false;
    }
    let scaled = value * 2f64.powi(decimals as i32 + 1);
    scaled.fract() == 0.0 && scaled.rem_euclid(2.0) == 1.0
}

fn is_zero(s: &str) -> bool {
    s.chars().all(|c| c == '0' || c == '.')
}
