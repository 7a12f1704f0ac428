use std::path::Path;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use page2md::cli;

/// Collect post links from a listing page into linkler.txt.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Listing page to scan
    url: String,

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

    match cli::run_get_links(&args.url, Path::new("."), &mut std::io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => cli::report_failure(&e),
    }
}
