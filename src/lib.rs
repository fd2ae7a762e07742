//! # roster-query
//!
//! Read-only queries over a pipe-delimited house roster.
//!
//! ## Overview
//!
//! A roster file holds one person per line, five fields in fixed order:
//!
//! ```text
//! first_name|last_name|house|advisor|cohort
//! ```
//!
//! - **house**: one of the five houses, or empty
//! - **cohort**: a term label such as `Fall 2015`, `G` for ghosts, `I` for
//!   instructors, or empty
//!
//! A [`Roster`] parses the source once and answers every query from the
//! parsed records. The `roster-scan` crate answers the same queries by
//! re-reading the file on each call.
//!
//! ## Example
//!
//! ```
//! use roster_query::{CohortFilter, Roster};
//!
//! let roster: Roster = "Harry|Potter|Gryffindor|McGonagall|Fall 2015
//! Ron|Weasley|Gryffindor|McGonagall|Fall 2015
//! Severus|Snape|||I"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(roster.all_houses().len(), 1);
//! assert_eq!(
//!     roster.students_by_cohort(&CohortFilter::All),
//!     vec!["Harry Potter", "Ron Weasley"]
//! );
//! assert!(roster.get_housemates_for("Harry Potter").contains("Ron Weasley"));
//! assert_eq!(roster.get_cohort_for("Severus Snape"), Some("I"));
//! ```

pub mod cli;
pub mod cohort;
pub mod error;
pub mod house;
pub mod query;
pub mod record;
pub mod roster;
pub mod source;

pub use cohort::CohortFilter;
pub use error::{Result, RosterError};
pub use house::{Bucket, HouseRosters};
pub use record::{
    DEFAULT_DELIMITER, FIELD_COUNT, GHOST_COHORT, HOUSES, INSTRUCTOR_COHORT, Person, Record,
};
pub use query::RosterQueries;
pub use roster::Roster;
pub use source::{MalformedPolicy, ParseOptions, RecordReader, read_path, read_records};
