// src/core/matcher.rs

use super::record::Record;

/// Split comma-separated user input into keywords: trimmed, empties dropped.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| s!(k))
        .collect()
}

/// Keep records where any keyword occurs, case-insensitively, in the Company
/// or Role field. Substring match: "dev" also matches "developer". Location
/// and Link are not searched. Original relative order is preserved. An empty
/// keyword set matches nothing; the runner rejects that case up front.
pub fn filter_by_keywords(records: &[Record], keywords: &[String]) -> Vec<Record> {
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    records
        .iter()
        .filter(|r| {
            let company = r.company.to_lowercase();
            let role = r.role.to_lowercase();
            lowered.iter().any(|k| company.contains(k.as_str()) || role.contains(k.as_str()))
        })
        .cloned()
        .collect()
}
