use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use page2md::cli;

/// Convert every page listed in a links file to Markdown.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// File with one URL per line
    links_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match cli::parse_args::<Args>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    cli::init_logging(args.verbose);

    match cli::run_batch(&args.links_file, Path::new("."), &mut std::io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => cli::report_failure(&e),
    }
}
