//! Custom assertions for export artifacts and rendered pages.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a JSON export carries every field of `original` unchanged,
/// plus the export metadata.
pub fn assert_export_round_trip(exported: &Value, original: &Value) -> Result<()> {
    let original = original
        .as_object()
        .context("Expected original framework to be a JSON object")?;

    for (key, value) in original {
        let got = exported
            .get(key)
            .with_context(|| format!("Export is missing field '{}'", key))?;
        if got != value {
            anyhow::bail!("Field '{}' changed: expected {}, got {}", key, value, got);
        }
    }

    let generated_at = exported["generated_at"]
        .as_str()
        .context("Expected 'generated_at' string in export")?;
    if !generated_at.ends_with('Z') || !generated_at.contains('T') {
        anyhow::bail!("'generated_at' is not an ISO-8601 UTC timestamp: {}", generated_at);
    }

    if !exported["framework_type_info"].is_object() {
        anyhow::bail!("Expected 'framework_type_info' object in export");
    }

    Ok(())
}

/// Assert the underline under the text report's title matches the title width.
pub fn assert_banner_width(report: &str, name: &str, type_name: &str) -> Result<()> {
    let underline = report
        .lines()
        .nth(2)
        .context("Report has fewer than three lines")?;

    let expected = name.chars().count() + type_name.chars().count() + 11;
    if !underline.chars().all(|c| c == '=') {
        anyhow::bail!("Third line is not an underline: {:?}", underline);
    }
    if underline.chars().count() != expected {
        anyhow::bail!(
            "Underline has {} characters, expected {}",
            underline.chars().count(),
            expected
        );
    }
    Ok(())
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
