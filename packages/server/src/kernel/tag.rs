//! Tag normalization and matching.
//!
//! Directory records accumulate tag vocabulary from several upstream sources
//! (scraped listings, manual edits, submission forms), so the same
//! accommodation shows up as "Sensory Room", "sensory-room", or
//! "sensory_room" depending on who entered it. Matching therefore runs on a
//! normalized form and tolerates phrasing drift in either direction: a
//! selected value matches a record tag when either normalized string
//! contains the other. The occasional false positive is an accepted
//! tradeoff; it keeps hand-entered data filterable without a curated
//! taxonomy.

/// Normalize a tag for comparison: lowercase, then strip runs of hyphens,
/// underscores, and whitespace.
///
/// `"Sensory Room"`, `"sensory-room"`, and `"SENSORY_ROOM"` all normalize to
/// `"sensoryroom"`.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .collect()
}

/// Whether a selected filter value matches a record tag.
///
/// Equality or containment in either direction, after normalization. The
/// bidirectional check is intentional: "aba" should find "ABA Therapy", and
/// "applied-behavior-analysis-aba" should still find records tagged plain
/// "ABA".
pub fn matches(selected: &str, record_tag: &str) -> bool {
    let a = normalize(selected);
    let b = normalize(record_tag);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(&b) || b.contains(&a)
}

/// Whether any of a record's tags matches the selected value.
///
/// An absent or empty tag list never matches a non-empty selection.
pub fn any_match(selected: &str, record_tags: &[String]) -> bool {
    record_tags.iter().any(|tag| matches(selected, tag))
}

/// Split a delimited tag string (pipe or comma separated) into trimmed,
/// non-empty parts. The faith-community dataset stores accommodations as
/// `"Sensory Room|Quiet Space|Trained Staff"`.
pub fn split_delimited(value: &str) -> Vec<String> {
    value
        .split(['|', ','])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
