//! CLI tool to query a roster file, re-reading it for each query.

use clap::Parser;
use roster_query::cli::{self, Cli};
use roster_scan::Scanner;
use std::process;

/// Same interface as `roster-query`; the roster is streamed from disk
/// instead of loaded up front.
fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let scanner = Scanner::new(cli.data.clone(), cli.parse_options());

    if cli.verbose {
        let destination = cli
            .output
            .as_ref()
            .map_or_else(|| "(stdout)".to_string(), |p| p.display().to_string());
        eprintln!("Roster:   {}", scanner.path().display());
        eprintln!("Output:   {destination}");
        eprintln!("Executor: re-scan");
    }

    let output = match cli::execute(&cli.query, &scanner) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::write_output(&output.text, cli.output.as_deref()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }

    if cli.verbose {
        eprintln!("Answer:   {} values", output.count);
    }

    if let Some(name) = output.missing {
        eprintln!("No record named '{name}'");
        process::exit(1);
    }
}
