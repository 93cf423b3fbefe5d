//! Text shown on the chart: axis labels and numbers.

/// Shorten long labels for the axis.
///
/// Labels with at least `at` characters keep their first `keep` characters
/// followed by `...`. Counts are in characters, not bytes.
pub fn truncate_label(label: &str, at: usize, keep: usize) -> String {
    if label.chars().count() < at {
        return label.to_string();
    }
    let mut short: String = label.chars().take(keep).collect();
    short.push_str("...");
    short
}

pub fn is_truncated(label: &str, at: usize) -> bool {
    label.chars().count() >= at
}

/// Whole numbers print bare, others with up to two decimals.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_labels_unchanged() {
        assert_eq!(truncate_label("root", 15, 12), "root");
        assert_eq!(truncate_label("fourteen-chars", 15, 12), "fourteen-chars");
        assert_eq!(truncate_label("", 15, 12), "");
    }

    #[test]
    fn test_long_labels_truncated() {
        assert_eq!(truncate_label("fifteen-chars!!", 15, 12), "fifteen-char...");
        assert_eq!(
            truncate_label("namespace-with-a-long-path/", 15, 12),
            "namespace-wi..."
        );
        assert!(is_truncated("fifteen-chars!!", 15));
        assert!(!is_truncated("fourteen-chars", 15));
    }

    #[test]
    fn test_truncation_counts_chars() {
        let label = "ñamespace-ñamespace";
        let short = truncate_label(label, 15, 12);
        assert_eq!(short, "ñamespace-ña...");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(60.0), "60");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(1.0 / 3.0), "0.33");
        assert_eq!(format_value(2.999), "3");
    }
}
