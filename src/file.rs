// src/file.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::record::Record;
use crate::core::render::{self, RenderFormat};
use crate::params::OUTPUT_SUFFIX;

/// Render the record set in every format and write one file per format into
/// `dir`, named `<stem>_extracted.<ext>`. Returns the paths written, in
/// format order.
pub fn write_outputs(
    dir: &Path,
    stem: &str,
    records: &[Record],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    ensure_directory(dir)?;

    let mut written = Vec::with_capacity(RenderFormat::ALL.len());
    for format in RenderFormat::ALL {
        let name = join!(stem, OUTPUT_SUFFIX, ".", format.ext());
        let path = dir.join(name);
        fs::write(&path, render::render(records, format))?;
        written.push(path);
    }
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Reduce arbitrary text to a filename-safe stem: lowercase alphanumerics
/// with single underscores between runs of anything else.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut gap = false;
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            gap = false;
        } else {
            gap = true;
        }
    }
    out
}
