//! Command-line plumbing shared by the `roster-query` and `roster-scan`
//! binaries.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::cohort::CohortFilter;
use crate::error::Result;
use crate::query::RosterQueries;
use crate::record::DEFAULT_DELIMITER;
use crate::source::{MalformedPolicy, ParseOptions};

/// Answer a query about a pipe-delimited house roster.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Roster file (first|last|house|advisor|cohort per line)
    pub data: PathBuf,

    #[command(subcommand)]
    pub query: Query,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Show source path and record counts on stderr, log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Drop lines with fewer than five fields instead of failing
    #[arg(long, global = true)]
    pub skip_malformed: bool,

    /// Field separator
    #[arg(long, default_value_t = DEFAULT_DELIMITER, global = true)]
    pub delimiter: char,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Distinct house names
    Houses,
    /// Students in a cohort, sorted ("All" for every cohort)
    Cohort {
        #[arg(default_value = CohortFilter::ALL_LABEL)]
        cohort: String,
    },
    /// Rosters for every house, then ghosts and instructors
    ByHouse,
    /// Every record as full_name|house|advisor|cohort
    Data,
    /// Cohort of the named person
    CohortOf { name: String },
    /// Last names shared by more than one person
    Dupes,
    /// People sharing house and cohort with the named person
    Housemates { name: String },
}

impl Cli {
    pub fn parse_options(&self) -> ParseOptions {
        let policy = if self.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Fail
        };
        ParseOptions::new()
            .with_delimiter(self.delimiter)
            .with_malformed(policy)
    }
}

/// Rendered answer to one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    pub text: String,
    /// Name that a `cohort-of` lookup failed to find.
    pub missing: Option<String>,
    /// Number of values in the answer.
    pub count: usize,
}

impl QueryOutput {
    fn lines<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self {
            count: lines.len(),
            text: lines.join("\n"),
            missing: None,
        }
    }
}

/// Run `query` against `engine` and render the answer one value per line.
pub fn execute<Q: RosterQueries + ?Sized>(query: &Query, engine: &Q) -> Result<QueryOutput> {
    let output = match query {
        Query::Houses => QueryOutput::lines(engine.all_houses()?),
        Query::Cohort { cohort } => {
            QueryOutput::lines(engine.students_by_cohort(&CohortFilter::from(cohort.as_str()))?)
        }
        Query::ByHouse => {
            let rosters = engine.all_names_by_house()?;
            let mut lines = Vec::new();
            for (bucket, names) in rosters.iter() {
                lines.push(format!("== {bucket} ({})", names.len()));
                lines.extend(names.iter().cloned());
            }
            QueryOutput {
                count: rosters.total(),
                ..QueryOutput::lines(lines)
            }
        }
        Query::Data => QueryOutput::lines(engine.all_data()?.into_iter().map(|p| {
            format!("{}|{}|{}|{}", p.full_name, p.house, p.advisor, p.cohort)
        })),
        Query::CohortOf { name } => match engine.get_cohort_for(name)? {
            Some(cohort) => QueryOutput::lines([cohort]),
            None => QueryOutput {
                text: String::new(),
                missing: Some(name.clone()),
                count: 0,
            },
        },
        Query::Dupes => QueryOutput::lines(engine.find_duped_last_names()?),
        Query::Housemates { name } => QueryOutput::lines(engine.get_housemates_for(name)?),
    };
    Ok(output)
}

/// Write `text` to `path` (creating parent directories) or to stdout.
pub fn write_output(text: &str, path: Option<&Path>) -> io::Result<()> {
    match path {
        Some(out_path) => {
            if let Some(parent) = out_path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            let mut contents = text.to_string();
            if !contents.is_empty() && !contents.ends_with('\n') {
                contents.push('\n');
            }
            fs::write(out_path, contents)
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.is_empty() && !text.ends_with('\n') {
                writeln!(stdout)?;
            }
            stdout.flush()
        }
    }
}

/// Install the `env_logger` backend. `RUST_LOG` overrides the default
/// level, which is `warn`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Roster;

    fn roster() -> Roster {
        Roster::parse(
            "Harry|Potter|Gryffindor|McGonagall|Fall 2015
Ron|Weasley|Gryffindor|McGonagall|Fall 2015
Ginny|Weasley|Gryffindor|McGonagall|Winter 2016
Severus|Snape|||I
",
        )
        .unwrap()
    }

    #[test]
    fn test_parse_cli_cohort_default() {
        let cli = Cli::try_parse_from(["roster-query", "data.txt", "cohort"]).unwrap();
        assert_eq!(
            cli.query,
            Query::Cohort {
                cohort: "All".to_string()
            }
        );
        assert_eq!(cli.parse_options(), ParseOptions::default());
    }

    #[test]
    fn test_parse_cli_flags() {
        let cli = Cli::try_parse_from([
            "roster-query",
            "data.txt",
            "housemates",
            "Harry Potter",
            "--skip-malformed",
            "-v",
            "-o",
            "out/answer.txt",
        ])
        .unwrap();
        assert_eq!(
            cli.query,
            Query::Housemates {
                name: "Harry Potter".to_string()
            }
        );
        assert!(cli.verbose);
        assert_eq!(cli.output, Some(PathBuf::from("out/answer.txt")));
        assert_eq!(cli.parse_options().on_malformed, MalformedPolicy::Skip);
    }

    #[test]
    fn test_parse_cli_rejects_unknown_query() {
        assert!(Cli::try_parse_from(["roster-query", "data.txt", "expel"]).is_err());
    }

    #[test]
    fn test_execute_houses() {
        let out = execute(&Query::Houses, &roster()).unwrap();
        assert_eq!(out.text, "Gryffindor");
        assert_eq!(out.count, 1);
    }

    #[test]
    fn test_execute_cohort() {
        let query = Query::Cohort {
            cohort: "Fall 2015".to_string(),
        };
        let out = execute(&query, &roster()).unwrap();
        assert_eq!(out.text, "Harry Potter\nRon Weasley");
    }

    #[test]
    fn test_execute_by_house() {
        let out = execute(&Query::ByHouse, &roster()).unwrap();
        assert!(out.text.starts_with("== Dumbledore's Army (0)\n== Gryffindor (3)\nGinny Weasley"));
        assert!(out.text.ends_with("== Instructors (1)\nSeverus Snape"));
        assert_eq!(out.count, 4);
    }

    #[test]
    fn test_execute_data() {
        let out = execute(&Query::Data, &roster()).unwrap();
        let lines: Vec<&str> = out.text.lines().collect();
        assert_eq!(lines[0], "Harry Potter|Gryffindor|McGonagall|Fall 2015");
        assert_eq!(lines[3], "Severus Snape|||I");
    }

    #[test]
    fn test_execute_cohort_of_missing() {
        let query = Query::CohortOf {
            name: "Balloonicorn".to_string(),
        };
        let out = execute(&query, &roster()).unwrap();
        assert_eq!(out.missing.as_deref(), Some("Balloonicorn"));
        assert!(out.text.is_empty());
    }

    #[test]
    fn test_execute_dupes_and_housemates() {
        let out = execute(&Query::Dupes, &roster()).unwrap();
        assert_eq!(out.text, "Weasley");

        let query = Query::Housemates {
            name: "Ron Weasley".to_string(),
        };
        let out = execute(&query, &roster()).unwrap();
        assert_eq!(out.text, "Harry Potter");
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/answer.txt");
        write_output("Gryffindor", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Gryffindor\n");
    }
}
