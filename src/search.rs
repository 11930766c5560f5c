//! Phone-model search over catalog rows.

use std::sync::Arc;

use crate::row::{fields, Row};

/// Normalizes raw search-box input: surrounding whitespace trimmed, lowercased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// True when the row's PHONE field is present, non-empty and contains the
/// already-normalized query (case-insensitively).
pub fn matches_phone(row: &Row, normalized_query: &str) -> bool {
    row.get_non_empty(fields::PHONE)
        .is_some_and(|phone| phone.to_lowercase().contains(normalized_query))
}

/// Returns the rows whose PHONE field contains `query`, in dataset order.
///
/// Rows without a PHONE value never match, not even the empty query.
pub fn search(rows: &[Arc<Row>], query: &str) -> Vec<Arc<Row>> {
    let normalized = normalize_query(query);
    rows.iter()
        .filter(|row| matches_phone(row, &normalized))
        .cloned()
        .collect()
}

/// Autocomplete suggestions: phone models containing the typed text, in list
/// order, at most `limit` entries. Nothing is suggested for blank input.
pub fn suggest_models<'a>(models: &'a [String], input: &str, limit: usize) -> Vec<&'a str> {
    let needle = normalize_query(input);
    if needle.is_empty() {
        return Vec::new();
    }
    models
        .iter()
        .filter(|model| model.to_lowercase().contains(&needle))
        .take(limit)
        .map(String::as_str)
        .collect()
}
