// src/core/dedup.rs

use std::collections::HashSet;

use super::record::Record;

/// Merge two record sets, first seen wins by identity key.
/// Result order: `primary` with its internal duplicates collapsed (original
/// order), then entries of `secondary` whose key was not yet seen, in their
/// original order. Pass an empty `secondary` to self-dedup a single set.
pub fn merge_dedup(primary: Vec<Record>, secondary: Vec<Record>) -> Vec<Record> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(primary.len() + secondary.len());
    for record in primary.into_iter().chain(secondary) {
        if seen.insert(record.identity_key()) {
            out.push(record);
        }
    }
    out
}
