// src/cli.rs
use std::{env, path::Path, path::PathBuf};

use crate::core::render::{AlignOptions, render_aligned};
use crate::params::{PREVIEW_LINES, Params};
use crate::runner::{self, Progress, RunSummary};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = CliProgress;
    let summary = runner::run(&params, Some(&mut progress))?;
    print_preview(&summary);
    Ok(())
}

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn file_written(&mut self, path: &Path) {
        println!("Saved: {}", path.display());
    }
}

fn print_preview(summary: &RunSummary) {
    let n = summary.records.len();
    println!("{n} record{} total.", if n == 1 { "" } else { "s" });
    if n == 0 {
        return;
    }
    let shown = n.min(PREVIEW_LINES);
    let table = render_aligned(&summary.records[..shown], &AlignOptions::default());
    print!("{table}");
    if shown < n {
        println!("... and {} more.", n - shown);
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-f" | "--file" => {
                params.source = Some(PathBuf::from(
                    args.next().ok_or("Missing value for --file")?,
                ));
            }
            "-k" | "--keywords" => {
                params.keywords = args.next().ok_or("Missing value for --keywords")?;
            }
            "--fetch" => params.fetch = true,
            "-l" | "--location" => {
                params.location = args.next().ok_or("Missing value for --location")?;
            }
            "-p" | "--pages" => {
                let v: u32 = args.next().ok_or("Missing value for --pages")?.parse()?;
                if v == 0 {
                    return Err("Pages must be at least 1".into());
                }
                params.pages = v;
            }
            "--check-links" => params.check_links = true,
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}
