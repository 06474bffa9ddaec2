// src/core/render.rs
//
// Pure rendering of a record set into tabular text. Four formats: aligned
// text for reading, TSV, RFC 4180 CSV, and a Markdown pipe table. Every
// format renders a header even for an empty set; none of them mutate input.

use super::csv;
use super::record::{FIELD_NAMES, Record};

pub const ELLIPSIS: &str = "...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderFormat {
    Aligned,
    Tsv,
    Csv,
    Markdown,
}

impl RenderFormat {
    pub const ALL: [RenderFormat; 4] = [
        RenderFormat::Aligned,
        RenderFormat::Tsv,
        RenderFormat::Csv,
        RenderFormat::Markdown,
    ];

    pub fn ext(&self) -> &'static str {
        match self {
            RenderFormat::Aligned => "txt",
            RenderFormat::Tsv => "tsv",
            RenderFormat::Csv => "csv",
            RenderFormat::Markdown => "md",
        }
    }
}

/// Column cap and inter-column padding for aligned output.
#[derive(Clone, Copy, Debug)]
pub struct AlignOptions {
    pub width_cap: usize,
    pub padding: usize,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self { width_cap: 40, padding: 2 }
    }
}

pub fn render(records: &[Record], format: RenderFormat) -> String {
    match format {
        RenderFormat::Aligned => render_aligned(records, &AlignOptions::default()),
        RenderFormat::Tsv => render_tsv(records),
        RenderFormat::Csv => render_csv(records),
        RenderFormat::Markdown => render_markdown(records),
    }
}

/* ---------------- Aligned ---------------- */

/// Fixed-width, left-justified table. Column width is the widest of the
/// header and all cells, capped; over-long values are cut to the cap with an
/// ellipsis marker. An empty set renders as the header line alone.
pub fn render_aligned(records: &[Record], opts: &AlignOptions) -> String {
    let mut widths = [0usize; 4];
    for (i, h) in FIELD_NAMES.iter().enumerate() {
        widths[i] = h.chars().count();
    }
    for r in records {
        for (i, f) in r.fields().iter().enumerate() {
            widths[i] = widths[i].max(f.chars().count());
        }
    }
    for w in &mut widths {
        *w = (*w).min(opts.width_cap);
    }

    let mut out = String::new();
    push_aligned_row(&mut out, &FIELD_NAMES, &widths, opts.padding);
    for r in records {
        push_aligned_row(&mut out, &r.fields(), &widths, opts.padding);
    }
    out
}

fn push_aligned_row(out: &mut String, cells: &[&str; 4], widths: &[usize; 4], padding: usize) {
    for (i, cell) in cells.iter().enumerate() {
        let cell = fit(cell, widths[i]);
        out.push_str(&cell);
        if i + 1 < cells.len() {
            for _ in cell.chars().count()..widths[i] + padding {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

/// Truncate to `width` chars, marking the cut with the ellipsis.
fn fit(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        return s!(s);
    }
    let marker = ELLIPSIS.chars().count();
    if width <= marker {
        return s.chars().take(width).collect();
    }
    let mut out: String = s.chars().take(width - marker).collect();
    out.push_str(ELLIPSIS);
    out
}

/* ---------------- TSV ---------------- */

pub fn render_tsv(records: &[Record]) -> String {
    let mut out = String::new();
    out.push_str(&FIELD_NAMES.join("\t"));
    out.push('\n');
    for r in records {
        let cells: Vec<String> = r.fields().iter().map(|f| scrub_tsv(f)).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

// Tabs and newlines are the TSV delimiters; they must not leak into values.
fn scrub_tsv(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\t', '\r', '\n'], " ")
}

/* ---------------- CSV ---------------- */

pub fn render_csv(records: &[Record]) -> String {
    let mut out = String::new();
    csv::push_row(&mut out, &FIELD_NAMES);
    for r in records {
        csv::push_row(&mut out, &r.fields());
    }
    out
}

/* ---------------- Markdown ---------------- */

pub fn render_markdown(records: &[Record]) -> String {
    let mut out = String::new();
    push_md_row(&mut out, &FIELD_NAMES);
    out.push_str("| --- | --- | --- | --- |\n");
    for r in records {
        push_md_row(&mut out, &r.fields());
    }
    out
}

fn push_md_row(out: &mut String, cells: &[&str; 4]) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(&cell.replace('|', "\\|"));
        out.push_str(" |");
    }
    out.push('\n');
}
