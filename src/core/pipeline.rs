// src/core/pipeline.rs
//
// The pure pipeline: normalize → validate → match → dedup. No I/O, no
// network; the runner owns reading, fetching and writing around this.

use super::dedup::merge_dedup;
use super::matcher::filter_by_keywords;
use super::record::{RawCandidate, Record};

/// Run both candidate sources through validation and keyword matching, then
/// merge primary-first with duplicates removed. Either source may be empty.
pub fn run(
    primary: Vec<RawCandidate>,
    secondary: Vec<RawCandidate>,
    keywords: &[String],
) -> Vec<Record> {
    let a = select(primary, keywords);
    let b = select(secondary, keywords);
    merge_dedup(a, b)
}

fn select(candidates: Vec<RawCandidate>, keywords: &[String]) -> Vec<Record> {
    let records: Vec<Record> = candidates
        .into_iter()
        .filter_map(RawCandidate::validate)
        .collect();
    filter_by_keywords(&records, keywords)
}
