// tests/render_formats.rs
//
// Exact-output checks for the four renderers, plus a CSV round-trip through
// the crate's own parser.

use job_scrape::core::csv;
use job_scrape::core::record::Record;
use job_scrape::core::render::{
    AlignOptions, RenderFormat, render, render_aligned, render_csv, render_markdown, render_tsv,
};

fn rec(company: &str, role: &str, location: &str, link: &str) -> Record {
    Record {
        company: company.into(),
        role: role.into(),
        location: location.into(),
        link: link.into(),
    }
}

/* ---------------- Aligned ---------------- */

#[test]
fn aligned_exact_small_table() {
    let records = vec![rec("Acme", "Dev", "", "x")];
    let out = render_aligned(&records, &AlignOptions::default());
    let expected = "\
Company  Role  Location  Link
Acme     Dev             x
";
    assert_eq!(out, expected);
}

#[test]
fn aligned_empty_set_is_header_only() {
    let out = render_aligned(&[], &AlignOptions::default());
    assert_eq!(out, "Company  Role  Location  Link\n");
}

#[test]
fn aligned_caps_width_with_ellipsis() {
    let long = "abcdefghijkl"; // 12 chars
    let records = vec![rec(long, "Dev", "", "")];
    let opts = AlignOptions { width_cap: 10, padding: 2 };
    let out = render_aligned(&records, &opts);
    let row = out.lines().nth(1).unwrap();
    assert!(row.starts_with("abcdefg..."));
    assert!(!row.contains(long));
}

#[test]
fn aligned_tiny_cap_truncates_without_marker() {
    let records = vec![rec("abcdef", "Dev", "", "")];
    let opts = AlignOptions { width_cap: 3, padding: 2 };
    let out = render_aligned(&records, &opts);
    let row = out.lines().nth(1).unwrap();
    assert!(row.starts_with("abc"));
    assert!(!row.contains("..."));
}

#[test]
fn aligned_last_column_not_padded() {
    let records = vec![rec("A", "B", "C", "D")];
    let out = render_aligned(&records, &AlignOptions::default());
    for line in out.lines() {
        assert_eq!(line, line.trim_end());
    }
}

/* ---------------- TSV ---------------- */

#[test]
fn tsv_header_and_scrubbing() {
    let records = vec![rec("a\tb", "c\r\nd", "e\nf", "g")];
    let out = render_tsv(&records);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Company\tRole\tLocation\tLink"));
    assert_eq!(lines.next(), Some("a b\tc d\te f\tg"));
}

#[test]
fn tsv_empty_set_is_header_only() {
    assert_eq!(render_tsv(&[]), "Company\tRole\tLocation\tLink\n");
}

/* ---------------- CSV ---------------- */

#[test]
fn csv_crlf_and_quote_only_when_needed() {
    let records = vec![rec("Acme, Inc.", "say \"hi\"", "plain", "")];
    let out = render_csv(&records);
    let mut lines = out.split("\r\n");
    assert_eq!(lines.next(), Some("Company,Role,Location,Link"));
    assert_eq!(lines.next(), Some("\"Acme, Inc.\",\"say \"\"hi\"\"\",plain,"));
    assert_eq!(lines.next(), Some(""));
}

#[test]
fn csv_round_trip_through_own_parser() {
    let records = vec![
        rec("Acme, Inc.", "Dev \"X\"", "Toronto, ON", "http://a?x=1,2"),
        rec("Beta", "multi\r\nline", "", "http://b"),
    ];
    let out = render_csv(&records);
    let rows = csv::parse(&out, ',');
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["Company", "Role", "Location", "Link"]);
    assert_eq!(rows[1][0], "Acme, Inc.");
    assert_eq!(rows[1][1], "Dev \"X\"");
    assert_eq!(rows[2][1], "multi\r\nline");
}

/* ---------------- Markdown ---------------- */

#[test]
fn markdown_table_with_escaped_pipes() {
    let records = vec![rec("A|B", "Dev", "", "")];
    let out = render_markdown(&records);
    let expected = "\
| Company | Role | Location | Link |
| --- | --- | --- | --- |
| A\\|B | Dev |  |  |
";
    assert_eq!(out, expected);
}

/* ---------------- Dispatch ---------------- */

#[test]
fn dispatch_matches_direct_calls() {
    let records = vec![rec("Acme", "Dev", "Toronto, ON", "http://a")];
    assert_eq!(
        render(&records, RenderFormat::Aligned),
        render_aligned(&records, &AlignOptions::default())
    );
    assert_eq!(render(&records, RenderFormat::Tsv), render_tsv(&records));
    assert_eq!(render(&records, RenderFormat::Csv), render_csv(&records));
    assert_eq!(render(&records, RenderFormat::Markdown), render_markdown(&records));
}
