// src/specs/document.rs
//
// Markdown/plain-text listing extraction. Two shapes are recognized, in
// document order:
// - pipe tables whose header row names at least two known fields
// - runs of `Alias: value` lines, one candidate per run

use std::mem::take;

use crate::core::record::{Field, RawCandidate};

pub fn extract_candidates(text: &str) -> Vec<RawCandidate> {
    let lines: Vec<&str> = text.lines().collect();
    let mut out = Vec::new();
    let mut block = RawCandidate::default();
    let mut block_open = false;
    let mut i = 0usize;

    while i < lines.len() {
        if let Some(columns) = table_header(&lines, i) {
            flush(&mut out, &mut block, &mut block_open);
            i += 2; // header + separator row
            while i < lines.len() && is_table_row(lines[i]) {
                if let Some(cand) = table_row(lines[i], &columns) {
                    out.push(cand);
                }
                i += 1;
            }
            continue;
        }

        if let Some((field, value)) = field_line(lines[i]) {
            if block_open && block.get(field).is_some() {
                // repeated key starts the next candidate
                flush(&mut out, &mut block, &mut block_open);
            }
            block.set(field, value);
            block_open = true;
        } else if lines[i].trim().is_empty() {
            flush(&mut out, &mut block, &mut block_open);
        }
        i += 1;
    }
    flush(&mut out, &mut block, &mut block_open);
    out
}

/* ---------- helpers ---------- */

fn flush(out: &mut Vec<RawCandidate>, block: &mut RawCandidate, open: &mut bool) {
    if *open {
        out.push(take(block));
        *open = false;
    }
}

/// Header row at `i` followed by a `---|---` separator row, with at least
/// two cells naming known fields. Returns the per-column field mapping.
fn table_header(lines: &[&str], i: usize) -> Option<Vec<Option<Field>>> {
    if i + 1 >= lines.len() || !is_table_row(lines[i]) || !is_separator_row(lines[i + 1]) {
        return None;
    }
    let columns: Vec<Option<Field>> = split_cells(lines[i])
        .iter()
        .map(|c| Field::from_alias(c))
        .collect();
    if columns.iter().flatten().count() < 2 {
        return None;
    }
    Some(columns)
}

fn is_table_row(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty() && t.contains('|')
}

fn is_separator_row(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty() && t.contains('-') && t.chars().all(|c| matches!(c, '-' | '|' | ':' | ' ' | '\t'))
}

/// Split a table line into trimmed cells; outer pipes optional, `\|` kept
/// as a literal pipe.
fn split_cells(line: &str) -> Vec<String> {
    let t = line.trim();
    let t = t.strip_prefix('|').unwrap_or(t);
    let t = t.strip_suffix('|').unwrap_or(t);

    let mut cells = Vec::new();
    let mut cur = s!();
    let mut chars = t.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' if matches!(chars.peek(), Some('|')) => {
                cur.push('|');
                chars.next();
            }
            '|' => cells.push(take(&mut cur)),
            _ => cur.push(ch),
        }
    }
    cells.push(cur);
    cells.iter().map(|c| s!(c.trim())).collect()
}

fn table_row(line: &str, columns: &[Option<Field>]) -> Option<RawCandidate> {
    let cells = split_cells(line);
    let mut cand = RawCandidate::default();
    let mut any = false;
    for (i, cell) in cells.iter().enumerate() {
        if let Some(Some(field)) = columns.get(i) {
            cand.set(*field, s!(cell.as_str()));
            any = true;
        }
    }
    if any { Some(cand) } else { None }
}

/// `Alias: value` line, tolerating a leading list bullet. A colon inside a
/// bare URL does not count ("http" is not a field alias).
fn field_line(line: &str) -> Option<(Field, String)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim().trim_start_matches(['-', '*']).trim();
    let field = Field::from_alias(name)?;
    Some((field, s!(value.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_with_alias_headers() {
        let text = "\
# Openings

| Employer | Title              | City        | URL       |
|----------|--------------------|-------------|-----------|
| Acme     | Software Engineer  | Toronto, ON | http://a  |
| Beta     | Data Analyst       |             |           |
";
        let cands = extract_candidates(text);
        assert_eq!(cands.len(), 2);
        assert_eq!(cands[0].company.as_deref(), Some("Acme"));
        assert_eq!(cands[0].role.as_deref(), Some("Software Engineer"));
        assert_eq!(cands[0].location.as_deref(), Some("Toronto, ON"));
        assert_eq!(cands[0].link.as_deref(), Some("http://a"));
        assert_eq!(cands[1].location.as_deref(), Some(""));
    }

    #[test]
    fn table_needs_two_known_columns() {
        let text = "\
| Name | Score |
|------|-------|
| A    | 1     |
";
        assert!(extract_candidates(text).is_empty());
    }

    #[test]
    fn unmapped_columns_ignored() {
        let text = "\
| Company | Role | Salary |
|---------|------|--------|
| Acme    | Dev  | 100k   |
";
        let cands = extract_candidates(text);
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].company.as_deref(), Some("Acme"));
        assert!(cands[0].location.is_none());
    }

    #[test]
    fn key_value_runs_split_on_blank_or_repeat() {
        let text = "\
Company: Acme
Role: Dev
Link: http://a

Company: Beta
Role: QA
Company: Gamma
Role: Ops
";
        let cands = extract_candidates(text);
        assert_eq!(cands.len(), 3);
        assert_eq!(cands[0].link.as_deref(), Some("http://a"));
        assert_eq!(cands[1].company.as_deref(), Some("Beta"));
        assert_eq!(cands[2].company.as_deref(), Some("Gamma"));
    }

    #[test]
    fn bullets_and_case_insensitive_aliases() {
        let text = "\
- employer: Acme
- TITLE: Dev
";
        let cands = extract_candidates(text);
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].company.as_deref(), Some("Acme"));
        assert_eq!(cands[0].role.as_deref(), Some("Dev"));
    }

    #[test]
    fn url_colon_is_not_a_field() {
        let cands = extract_candidates("http://example.com/jobs\n");
        assert!(cands.is_empty());
    }

    #[test]
    fn escaped_pipe_in_cell() {
        let text = "\
| Company | Role |
|---------|------|
| A\\|B   | Dev  |
";
        let cands = extract_candidates(text);
        assert_eq!(cands[0].company.as_deref(), Some("A|B"));
    }

    #[test]
    fn prose_is_ignored() {
        let text = "Just some notes.\n\nNothing structured here.\n";
        assert!(extract_candidates(text).is_empty());
    }
}
