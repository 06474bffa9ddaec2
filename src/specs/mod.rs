// src/specs/mod.rs
//! # Extraction "specs" module
//!
//! Source-specific extraction lives here. Each spec encodes *where the data
//! lives* in one kind of source and *how to read it tolerantly*:
//!
//! - `document`: Markdown/plain-text listing files (pipe tables, key/value
//!   runs).
//! - `eluta`: eluta.ca search-result pages, scanned with `core::html`
//!   helpers; no brittle full-document regexes.
//!
//! Specs produce `RawCandidate`s and nothing else. Validation, keyword
//! matching, dedup and rendering belong to `core`; fetch cadence and file
//! writing to the runner. Every spec is testable offline against fixture
//! text, no network required.
pub mod document;
pub mod eluta;
