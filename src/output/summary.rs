//! Plain-text summary of a ranked tally.

use crate::tally::RankedTally;

// Method column width; longer names keep their tail
const METHOD_WIDTH: usize = 60;

/// Render the top `max_rows` entries of a ranked tally as a table
///
/// **Public** - printed by the scan command with `--summary`
pub fn generate_text_summary(title: &str, ranked: &RankedTally, max_rows: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {}", title));
    lines.push(format!("  {}", "-".repeat(METHOD_WIDTH + 13)));
    lines.push(format!("  {:<width$} | {:>10}", "Method", "Count", width = METHOD_WIDTH));
    lines.push(format!("  {}", "-".repeat(METHOD_WIDTH + 13)));

    if ranked.is_empty() {
        lines.push("  (no events)".to_string());
    }

    for (method, count) in ranked.iter().take(max_rows) {
        lines.push(format!(
            "  {:<width$} | {:>10}",
            truncate_method(method),
            count,
            width = METHOD_WIDTH
        ));
    }

    if ranked.len() > max_rows {
        lines.push(format!("  ... {} more", ranked.len() - max_rows));
    }

    lines.push(format!("  {}", "-".repeat(METHOD_WIDTH + 13)));
    lines.push(format!("  Distinct methods: {}", ranked.len()));
    lines.push(format!("  Total count:      {}", ranked.values().sum::<u64>()));

    lines.join("\n")
}

/// Keep the tail of long method names, it carries the method itself
///
/// **Private** - display helper
fn truncate_method(method: &str) -> String {
    let chars: Vec<char> = method.chars().collect();
    if chars.len() <= METHOD_WIDTH {
        return method.to_string();
    }
    let tail: String = chars[chars.len() - (METHOD_WIDTH - 3)..].iter().collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(entries: &[(&str, u64)]) -> RankedTally {
        entries
            .iter()
            .map(|(method, count)| (method.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_summary_limits_rows() {
        let stat = ranked(&[("a", 5), ("b", 3), ("c", 1)]);
        let text = generate_text_summary("DEOPTIMIZATIONS", &stat, 2);

        assert!(text.contains("DEOPTIMIZATIONS"));
        assert!(text.contains("... 1 more"));
        assert!(text.contains("Distinct methods: 3"));
        assert!(text.contains("Total count:      9"));
    }

    #[test]
    fn test_summary_empty() {
        let text = generate_text_summary("UNCOMMON TRAPS", &RankedTally::new(), 10);
        assert!(text.contains("(no events)"));
        assert!(text.contains("Distinct methods: 0"));
    }

    #[test]
    fn test_truncate_keeps_tail() {
        let long = format!("{}run", "x".repeat(100));
        let shown = truncate_method(&long);

        assert_eq!(shown.chars().count(), METHOD_WIDTH);
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with("run"));
    }
}
