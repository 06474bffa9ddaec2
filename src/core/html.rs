// src/core/html.rs
//
// Tolerant, case-insensitive HTML scanning. No DOM, no regex: local scans
// within known blocks, resilient to whitespace, attribute order and noise.

use super::markup::normalize_ws;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Next `<tag ...>...</tag>` element at or after `from`, as (start, end)
/// byte offsets of the whole element. The tag-name match is boundary-checked,
/// so scanning for "a" does not stop at "<article>".
pub fn next_element_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open = join!("<", &to_lower(tag));
    let close = join!("</", &to_lower(tag), ">");
    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&open)? + at;
        let name_end = start + open.len();
        let boundary = matches!(
            lc.as_bytes().get(name_end).copied(),
            None | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'>') | Some(b'/')
        );
        if !boundary {
            at = name_end;
            continue;
        }
        let open_end = s[start..].find('>')? + start + 1;
        let end_rel = lc.get(open_end..)?.find(&close)?;
        return Some((start, open_end + end_rel + close.len()));
    }
}

/// Next element of `tag` whose class attribute contains any of `needles`.
pub fn next_element_with_class_ci(
    s: &str,
    tag: &str,
    needles: &[&str],
    from: usize,
) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some((start, end)) = next_element_ci(s, tag, pos) {
        if class_contains(open_tag(&s[start..end]), needles) {
            return Some((start, end));
        }
        pos = start + 1;
    }
    None
}

/// The element's opening tag, up to and including the first '>'.
pub fn open_tag(element: &str) -> &str {
    match element.find('>') {
        Some(i) => &element[..=i],
        None => element,
    }
}

/// Inner text between the opening tag and the final closing tag.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return s!(&block[oe + 1..cs]);
            }
        }
    }
    s!()
}

/// Value of a named attribute in an opening tag; either quote style, or
/// unquoted up to whitespace/'>'. Case-insensitive attribute name.
pub fn attr_value(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = to_lower(name);
    let b = tag.as_bytes();
    let mut at = 0usize;

    while let Some(rel) = lc[at..].find(&needle) {
        let start = at + rel;
        at = start + needle.len();

        // must be preceded by whitespace and followed by (optional ws) '='
        if start == 0 || !b[start - 1].is_ascii_whitespace() {
            continue;
        }
        let mut j = start + needle.len();
        while j < b.len() && b[j].is_ascii_whitespace() { j += 1; }
        if j >= b.len() || b[j] != b'=' {
            continue;
        }
        j += 1;
        while j < b.len() && b[j].is_ascii_whitespace() { j += 1; }
        if j >= b.len() {
            return None;
        }

        let quote = b[j];
        if quote == b'"' || quote == b'\'' {
            let rest = &tag[j + 1..];
            let end = rest.find(quote as char)?;
            return Some(s!(&rest[..end]));
        }
        let rest = &tag[j..];
        let end = rest
            .find(|c: char| c.is_ascii_whitespace() || c == '>')
            .unwrap_or(rest.len());
        return Some(s!(&rest[..end]));
    }
    None
}

/// True when the tag's class attribute contains any of the needles.
pub fn class_contains(tag: &str, needles: &[&str]) -> bool {
    match attr_value(tag, "class") {
        Some(v) => {
            let v = to_lower(&v);
            needles.iter().any(|n| v.contains(n))
        }
        None => false,
    }
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(i) = rest.find('<') {
        out.push_str(&rest[..i]);
        match rest[i + 1..].find('>') {
            Some(j) => {
                out.push(' ');
                rest = &rest[i + 1 + j + 1..];
            }
            // bare '<' with no closing '>' is plain text
            None => {
                out.push('<');
                rest = &rest[i + 1..];
            }
        }
    }
    out.push_str(rest);
    normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_drops_complete_tags_only() {
        assert_eq!(strip_tags("<b>Acme</b> Ltd"), "Acme Ltd");
        assert_eq!(strip_tags("a<br>b"), "a b");
        assert_eq!(strip_tags("Salary < 100k"), "Salary < 100k");
        assert_eq!(strip_tags("cut <off"), "cut <off");
    }
}
