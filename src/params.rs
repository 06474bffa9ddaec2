// src/params.rs
use std::path::PathBuf;

// Net config
pub const HOST: &str = "www.eluta.ca";
pub const SEARCH_PATH: &str = "/search";
// Some environments/proxies block non-browser UAs; use a common one.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
pub const REQUEST_PAUSE_MS: u64 = 800; // be polite between pages

// Output
pub const OUTPUT_SUFFIX: &str = "_extracted";
pub const FETCH_STEM_PREFIX: &str = "eluta_";
pub const DEFAULT_STEM: &str = "results";

// CLI preview
pub const PREVIEW_LINES: usize = 6;

/// One run's worth of configuration. Built by the CLI, handed to the runner;
/// nothing in the pipeline reads the environment or global state.
#[derive(Clone, Debug)]
pub struct Params {
    pub source: Option<PathBuf>, // local .md/.txt file to extract from
    pub keywords: String,        // comma-separated, raw user input
    pub fetch: bool,             // also scrape eluta.ca
    pub location: String,        // fetch-only: location filter, may be empty
    pub pages: u32,              // fetch-only: result pages to walk
    pub check_links: bool,       // drop fetched records with dead links
    pub out: Option<PathBuf>,    // output directory (default: cwd)
}

impl Params {
    pub fn new() -> Self {
        Self {
            source: None,
            keywords: s!(),
            fetch: false,
            location: s!(),
            pages: 1,
            check_links: false,
            out: None,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
