// src/core/markup.rs
//
// Markup normalizer: reduce a raw field to plain display text.
// Malformed markup never errors; it degrades to best-effort text with the
// recognizable tokens stripped.

/// `[label](url)` → label, `![alt](url)` → alt, `` `code` `` → code,
/// HTML tags dropped, entities resolved, whitespace collapsed and trimmed.
/// Idempotent over its own output.
pub fn normalize(raw: &str) -> String {
    normalize_ws(&normalize_entities(&scan(raw, false)))
}

/// Link-field variant: `[label](url)` keeps the raw `url` and drops the
/// label and brackets. Everything else as `normalize`.
pub fn normalize_link(raw: &str) -> String {
    normalize_ws(&normalize_entities(&scan(raw, true)))
}

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    s!(out.trim())
}

fn scan(s: &str, keep_url: bool) -> String {
    let b = s.as_bytes();
    let n = s.len();
    let mut out = String::with_capacity(n);
    let mut i = 0usize;

    while i < n {
        match b[i] {
            b'!' if i + 1 < n && b[i + 1] == b'[' => {
                let (text, next) = bracketed(s, i + 1, keep_url);
                out.push_str(&text);
                i = next;
            }
            b'[' => {
                let (text, next) = bracketed(s, i, keep_url);
                out.push_str(&text);
                i = next;
            }
            b']' => i += 1, // stray closer: strip
            b'`' => match s[i + 1..].find('`') {
                Some(rel) => {
                    // code span: keep content, drop the backticks
                    out.push_str(&s[i + 1..i + 1 + rel]);
                    i += rel + 2;
                }
                None => i += 1, // unpaired backtick: strip it
            },
            b'<' => match s[i + 1..].find('>') {
                // a tag contributes a separator so "a<br>b" stays two words
                Some(rel) => { out.push(' '); i += rel + 2; }
                None => { out.push('<'); i += 1; } // bare '<': plain text
            },
            _ => {
                let ch = s[i..].chars().next().unwrap();
                out.push(ch);
                i += ch.len_utf8();
            }
        }
    }
    out
}

/// Consume a `[label](url)` / `[label]` group starting at the `[`.
/// Returns the replacement text and the index to resume scanning at.
fn bracketed(s: &str, open: usize, keep_url: bool) -> (String, usize) {
    let close = match s[open + 1..].find(']') {
        Some(rel) => open + 1 + rel,
        None => return (s!(), open + 1), // no closer: strip the bracket
    };
    let label = &s[open + 1..close];
    let after = close + 1;

    if s[after..].starts_with('(') {
        if let Some(rel) = s[after + 1..].find(')') {
            let url = &s[after + 1..after + 1 + rel];
            let text = if keep_url { s!(url.trim()) } else { scan(label, keep_url) };
            return (text, after + 1 + rel + 1);
        }
    }
    // `[label]` without a url part: keep the label text only
    (scan(label, keep_url), after)
}
