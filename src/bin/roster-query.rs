//! CLI tool to query a roster file, parsing it once up front.
//!
//! Usage:
//!   roster-query <roster.txt> houses
//!   roster-query <roster.txt> cohort "Fall 2015"
//!   roster-query <roster.txt> housemates "Hermione Granger" -o out.txt

use clap::Parser;
use roster_query::cli::{self, Cli};
use roster_query::{ParseOptions, Roster};
use std::process;

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let options: ParseOptions = cli.parse_options();
    let roster = match Roster::from_path(&cli.data, options) {
        Ok(roster) => roster,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Roster:   {}", cli.data.display());
        eprintln!("Records:  {}", roster.len());
        eprintln!("Executor: parse-once");
    }

    let output = match cli::execute(&cli.query, &roster) {
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
