/// `part / total * 100`, rounded half-up to one decimal. Zero when `total` is 0.
///
/// Works in integer tenths so that e.g. 1/8 lands on 12.5 rather than a
/// neighbouring float.
pub fn percent_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let (part, total) = (part as u128, total as u128);
    let tenths = (2000 * part + total) / (2 * total);
    tenths as f64 / 10.0
}

/// Renders a percentage the way the dashboard shows it: `"50.0"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}")
}

/// Arithmetic mean, `None` for an empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
