// Formatting helpers shared by the console views and the PDF report.
use num_format::{Locale, ToFormattedString};

/// Render a metric value with exactly two decimal places.
///
/// Every numeric in the views and the report goes through this, so an
/// upload value of `82` always appears as `82.00` regardless of the
/// precision in the file. No thousands separators; the metrics are small
/// percentages and index scores.
pub fn format_metric(n: f64) -> String {
    format!("{:.2}", n)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for counts in console messages
    // (e.g., `1,204 rows loaded`).
    n.to_formatted_string(&Locale::en)
}
