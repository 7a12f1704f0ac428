use std::path::Path;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use page2md::cli;

/// Convert a single web page to Markdown.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Page to convert
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

    match cli::run_single(&args.url, Path::new("."), &mut std::io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => cli::report_failure(&e),
    }
}
