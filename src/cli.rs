//! Shared plumbing for the three binaries: argument parsing, logging setup
//! and the per-program run functions. Progress goes to the supplied writer,
//! output files land in `out_dir`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use tracing::{Level, warn};

use crate::config::{ConvertOptions, LinkOptions};
use crate::convert::Converter;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::filename::derive_filename;
use crate::links::LinkExtractor;

pub const LINKS_FILE: &str = "linkler.txt";

/// Parses arguments, mapping any usage error to exit code 1. `--help` and
/// `--version` print and exit 0 as usual.
pub fn parse_args<T: Parser>() -> std::result::Result<T, ExitCode> {
    match T::try_parse() {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            let _ = e.print();
            Err(ExitCode::SUCCESS)
        }
        Err(e) => {
            let _ = e.print();
            Err(ExitCode::FAILURE)
        }
    }
}

pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Extracts post links from `url` and writes them, one per line, to
/// [`LINKS_FILE`] in `out_dir`.
pub fn run_get_links(url: &str, out_dir: &Path, out: &mut impl Write) -> Result<PathBuf> {
    let extractor = LinkExtractor::new(Fetcher::new()?, &LinkOptions::default())?;
    let links = extractor.extract(url)?;

    let path = out_dir.join(LINKS_FILE);
    let contents: String = links.iter().map(|link| format!("{link}\n")).collect();
    write_file(&path, &contents)?;

    writeln!(out, "Saved {} links to '{}'.", links.len(), path.display()).map_err(Error::Output)?;
    Ok(path)
}

/// Converts a single page without related-posts truncation.
pub fn run_single(url: &str, out_dir: &Path, out: &mut impl Write) -> Result<PathBuf> {
    let converter = Converter::new(Fetcher::new()?, ConvertOptions::default());
    let markdown = converter.convert(url)?;

    let path = out_dir.join(derive_filename(url));
    write_file(&path, &markdown)?;

    writeln!(out, "Saved '{url}' as '{}'.", path.display()).map_err(Error::Output)?;
    Ok(path)
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<String>,
}

/// Converts every URL listed in `links_file`. Per-URL failures are reported
/// and skipped; only an unreadable links file or broken output aborts.
pub fn run_batch(links_file: &Path, out_dir: &Path, out: &mut impl Write) -> Result<BatchReport> {
    let contents = std::fs::read_to_string(links_file).map_err(|source| Error::Read {
        path: links_file.to_path_buf(),
        source,
    })?;

    let urls: Vec<&str> = contents.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
    let mut report = BatchReport::default();

    if urls.is_empty() {
        writeln!(out, "No links found in '{}'.", links_file.display()).map_err(Error::Output)?;
        return Ok(report);
    }

    let converter = Converter::new(Fetcher::new()?, ConvertOptions::batch());

    for url in urls {
        writeln!(out, "Converting: {url}").map_err(Error::Output)?;

        let markdown = match converter.convert(url) {
            Ok(markdown) if !markdown.is_empty() => markdown,
            Ok(_) => {
                writeln!(out, "Warning: no content could be extracted from '{url}'.").map_err(Error::Output)?;
                report.failed.push(url.to_string());
                continue;
            }
            Err(e) => {
                warn!(url, error = %e, "conversion failed");
                writeln!(out, "Warning: could not fetch or convert '{url}': {e}").map_err(Error::Output)?;
                report.failed.push(url.to_string());
                continue;
            }
        };

        let path = out_dir.join(derive_filename(url));
        match write_file(&path, &markdown) {
            Ok(()) => {
                writeln!(out, "Saved: '{}'", path.display()).map_err(Error::Output)?;
                report.saved.push(path);
            }
            Err(e) => {
                writeln!(out, "Error: {e}").map_err(Error::Output)?;
                report.failed.push(url.to_string());
            }
        }
    }

    Ok(report)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Prints the error for a failed top-level run and returns exit code 1.
pub fn report_failure(err: &Error) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::FAILURE
}
