// src/runner.rs
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    core::matcher::parse_keywords,
    core::pipeline,
    core::record::Record,
    file::{slugify, write_outputs},
    net,
    params::{DEFAULT_STEM, FETCH_STEM_PREFIX, Params},
    specs,
};

/// Optional progress sink for the frontend (CLI: print lines).
pub trait Progress {
    fn log(&mut self, _msg: &str) {}
    fn file_written(&mut self, _path: &Path) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// What a run produced: the final record set and the files it was saved to.
pub struct RunSummary {
    pub records: Vec<Record>,
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: gather candidates from the configured sources, run the
/// pipeline, write all output formats.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let keywords = parse_keywords(&params.keywords);
    if keywords.is_empty() {
        return Err("no keywords given; nothing would match".into());
    }
    if params.source.is_none() && !params.fetch {
        return Err("no source: give a listing file, --fetch, or both".into());
    }

    let primary = match &params.source {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let cands = specs::document::extract_candidates(&text);
            logf!("document {}: {} candidates", path.display(), cands.len());
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!(
                    "Extracted {} candidates from {}",
                    cands.len(),
                    path.display()
                ));
            }
            cands
        }
        None => Vec::new(),
    };

    let secondary = if params.fetch {
        let query = keywords.join(" ");
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching eluta.ca results for \"{query}\"..."));
        }
        let mut cands = specs::eluta::fetch(&query, &params.location, params.pages);
        logf!("eluta fetch: {} candidates", cands.len());
        if params.check_links {
            let before = cands.len();
            cands.retain(|c| match c.link.as_deref() {
                Some(url) if !url.trim().is_empty() => net::link_is_live(url),
                _ => true,
            });
            logf!("link check dropped {}", before - cands.len());
        }
        cands
    } else {
        Vec::new()
    };

    let records = pipeline::run(primary, secondary, &keywords);
    logf!("pipeline kept {} records", records.len());

    let stem = output_stem(params, &keywords);
    let outdir = params.out.clone().unwrap_or_else(|| PathBuf::from("."));
    let files_written = write_outputs(&outdir, &stem, &records)?;

    if let Some(p) = progress.as_deref_mut() {
        for path in &files_written {
            p.file_written(path);
        }
    }
    Ok(RunSummary { records, files_written })
}

/// Output stem: the source file's stem when extracting from a file, an
/// `eluta_<keyword slug>` stem for fetch-only runs.
fn output_stem(params: &Params, keywords: &[String]) -> String {
    if let Some(path) = &params.source {
        if let Some(stem) = path.file_stem() {
            let s = stem.to_string_lossy();
            if !s.is_empty() {
                return s!(s.as_ref());
            }
        }
    }
    if params.fetch {
        let slug = slugify(&keywords.join(" "));
        if !slug.is_empty() {
            return join!(FETCH_STEM_PREFIX, &slug);
        }
    }
    s!(DEFAULT_STEM)
}
