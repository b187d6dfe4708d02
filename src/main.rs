//! `stepcards` command-line entry point

use clap::Parser;

use stepcards::cli::args::Cli;
use stepcards::cli::commands;
use stepcards::error::ExitCode;
use stepcards::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
