// src/specs/eluta.rs
//
// Eluta.ca search-result extraction. This spec knows where listings live in
// the result-page markup and how to read them tolerantly; fetch cadence is
// the only other thing here, and everything downstream lives in core.

use std::thread;
use std::time::Duration;

use crate::core::html::{
    attr_value, class_contains, inner_after_open_tag, next_element_ci,
    next_element_with_class_ci, open_tag, strip_tags,
};
use crate::core::markup::normalize_entities;
use crate::core::record::{Field, RawCandidate};
use crate::net;
use crate::params::{HOST, REQUEST_PAUSE_MS, SEARCH_PATH};

const TITLE_CLASSES: [&str; 3] = ["title", "job", "posting"];
const COMPANY_CLASSES: [&str; 2] = ["company", "employer"];
const LOCATION_CLASSES: [&str; 3] = ["location", "city", "cities"];
const PROVINCES: [&str; 13] = [
    "ON", "QC", "BC", "AB", "MB", "SK", "NS", "NB", "NL", "PE", "YT", "NT", "NU",
];

/// `/search?q=…&l=…&p=…`; `l` and `p` only when meaningful.
pub fn build_search_path(query: &str, location: &str, page: u32) -> String {
    let mut path = join!(SEARCH_PATH, "?q=", &net::urlencode(query.trim()));
    let l = location.trim();
    if !l.is_empty() {
        path.push_str("&l=");
        path.push_str(&net::urlencode(l));
    }
    if page > 1 {
        path.push_str("&p=");
        path.push_str(&page.to_string());
    }
    path
}

/// Walk result pages and collect candidates. A failed request or an empty
/// page past the first ends the walk; whatever was collected is returned.
pub fn fetch(query: &str, location: &str, pages: u32) -> Vec<RawCandidate> {
    let mut all = Vec::new();
    let pages = pages.max(1);
    for page in 1..=pages {
        let path = build_search_path(query, location, page);
        let doc = match net::http_get(HOST, &path) {
            Ok(doc) => doc,
            Err(e) => {
                loge!("eluta page {page} fetch failed: {e}");
                break;
            }
        };
        let found = parse_results(&doc);
        logf!("eluta page {page}: {} listing blocks", found.len());
        if found.is_empty() && page > 1 {
            break; // likely past the last page
        }
        all.extend(found);
        if page < pages {
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
        }
    }
    all
}

/// Pull candidates out of one result page. Blocks without a title-bearing
/// anchor are not listings and are skipped.
pub fn parse_results(doc: &str) -> Vec<RawCandidate> {
    let mut out = Vec::new();
    for block in result_blocks(doc) {
        let (href, title) = extract_link_and_title(&block);
        if title.is_empty() {
            continue;
        }
        let mut cand = RawCandidate::default();
        cand.set(Field::Role, title);
        let company = extract_company(&block);
        if !company.is_empty() {
            cand.set(Field::Company, company);
        }
        let location = extract_location(&block);
        if !location.is_empty() {
            cand.set(Field::Location, location);
        }
        if !href.is_empty() {
            cand.set(Field::Link, absolutize(&href));
        }
        out.push(cand);
    }
    out
}

/* ---------- helpers ---------- */

/// Result containers: `<article>` blocks, else divs whose class looks like
/// a result/job card.
fn result_blocks(doc: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_element_ci(doc, "article", pos) {
        blocks.push(inner_after_open_tag(&doc[s..e]));
        pos = e;
    }
    if blocks.is_empty() {
        let mut pos = 0usize;
        while let Some((s, e)) = next_element_with_class_ci(doc, "div", &["result", "job"], pos) {
            blocks.push(inner_after_open_tag(&doc[s..e]));
            pos = e;
        }
    }
    blocks
}

fn clean(s: &str) -> String {
    strip_tags(normalize_entities(s))
}

/// Prefer an anchor with a title-like class; otherwise the first anchor.
fn extract_link_and_title(block: &str) -> (String, String) {
    let mut first: Option<(String, String)> = None;
    let mut pos = 0usize;
    while let Some((s, e)) = next_element_ci(block, "a", pos) {
        let element = &block[s..e];
        let tag = open_tag(element);
        let href = attr_value(tag, "href").unwrap_or_default();
        let text = clean(&inner_after_open_tag(element));
        if class_contains(tag, &TITLE_CLASSES) && !href.is_empty() {
            return (href, text);
        }
        if first.is_none() {
            first = Some((href, text));
        }
        pos = e;
    }
    first.unwrap_or_default()
}

fn extract_company(block: &str) -> String {
    for tag in ["div", "span", "a"] {
        if let Some((s, e)) = next_element_with_class_ci(block, tag, &COMPANY_CLASSES, 0) {
            return clean(&inner_after_open_tag(&block[s..e]));
        }
    }
    // Fallback: the second anchor is usually the employer.
    let mut pos = 0usize;
    let mut seen = 0u32;
    while let Some((s, e)) = next_element_ci(block, "a", pos) {
        seen += 1;
        if seen == 2 {
            return clean(&inner_after_open_tag(&block[s..e]));
        }
        pos = e;
    }
    s!()
}

fn extract_location(block: &str) -> String {
    for tag in ["div", "span"] {
        if let Some((s, e)) = next_element_with_class_ci(block, tag, &LOCATION_CLASSES, 0) {
            return clean(&inner_after_open_tag(&block[s..e]));
        }
    }
    city_province(&clean(block)).unwrap_or_default()
}

/// Scan visible text for a `City, PROV` token pair.
fn city_province(text: &str) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    for (i, tok) in tokens.iter().enumerate() {
        let code = tok.trim_matches(|c: char| !c.is_ascii_alphabetic());
        if i == 0 || !PROVINCES.contains(&code) {
            continue;
        }
        let prev = tokens[i - 1].trim_end_matches(',');
        let capitalized = prev.chars().next().is_some_and(|c| c.is_ascii_uppercase())
            && prev.chars().any(|c| c.is_ascii_lowercase());
        if capitalized {
            return Some(join!(prev, ", ", code));
        }
    }
    None
}

fn absolutize(href: &str) -> String {
    if href.starts_with('/') {
        join!("https://", HOST, href)
    } else {
        s!(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <article class="organic">
          <a class="lk-job-title" href="/goto/1">Software <b>Engineer</b></a>
          <span class="employer">Acme Ltd</span>
          <div class="location">Toronto, ON</div>
        </article>
        <article>
          <a href="http://beta.example/2">Data Analyst</a>
          <a href="http://beta.example">Beta&nbsp;Inc</a>
          Posted in Halifax, NS yesterday
        </article>
        <article>
          <span>no anchor, not a listing</span>
        </article>
        </body></html>
    "#;

    #[test]
    fn parses_article_blocks() {
        let cands = parse_results(PAGE);
        assert_eq!(cands.len(), 2);

        assert_eq!(cands[0].role.as_deref(), Some("Software Engineer"));
        assert_eq!(cands[0].company.as_deref(), Some("Acme Ltd"));
        assert_eq!(cands[0].location.as_deref(), Some("Toronto, ON"));
        assert_eq!(cands[0].link.as_deref(), Some("https://www.eluta.ca/goto/1"));

        // second block: first-anchor title, second-anchor company,
        // province-token location fallback
        assert_eq!(cands[1].role.as_deref(), Some("Data Analyst"));
        assert_eq!(cands[1].company.as_deref(), Some("Beta Inc"));
        assert_eq!(cands[1].location.as_deref(), Some("Halifax, NS"));
        assert_eq!(cands[1].link.as_deref(), Some("http://beta.example/2"));
    }

    #[test]
    fn falls_back_to_result_divs() {
        let page = r#"
            <div class="searchresult job">
              <a class="posting" href="/goto/9">Night Clerk</a>
              <span class="company">Gamma</span>
            </div>
            <div class="sidebar">not a result</div>
        "#;
        let cands = parse_results(page);
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].role.as_deref(), Some("Night Clerk"));
        assert_eq!(cands[0].company.as_deref(), Some("Gamma"));
        assert!(cands[0].location.is_none());
    }

    #[test]
    fn titleless_blocks_skipped() {
        let page = r#"<article><a href="/x"></a></article>"#;
        assert!(parse_results(page).is_empty());
    }

    #[test]
    fn search_path_encodes_and_omits_defaults() {
        assert_eq!(
            build_search_path("software engineer", "", 1),
            "/search?q=software+engineer"
        );
        assert_eq!(
            build_search_path("c++ dev", "Toronto, ON", 3),
            "/search?q=c%2B%2B+dev&l=Toronto%2C+ON&p=3"
        );
    }

    #[test]
    fn city_province_scan() {
        assert_eq!(
            city_province("Posted in Halifax, NS yesterday").as_deref(),
            Some("Halifax, NS")
        );
        assert_eq!(city_province("NOTHING ON offer here"), None);
        assert_eq!(city_province("ON its own"), None);
    }
}
