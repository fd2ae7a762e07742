//! Roster record type and line parser.
//!
//! Each line of a roster source holds five delimited fields in fixed order:
//!
//! ```text
//! first_name|last_name|house|advisor|cohort
//! Harry|Potter|Gryffindor|McGonagall|Fall 2015
//! Nearly Headless|Nick|||G
//! ```
//!
//! Records are built from a line, queried, and dropped. Nothing mutates them.

use crate::error::{Result, RosterError};

/// Number of fields every roster line must carry.
pub const FIELD_COUNT: usize = 5;

/// Field separator used by roster files.
pub const DEFAULT_DELIMITER: char = '|';

/// Cohort marker for ghosts.
pub const GHOST_COHORT: &str = "G";

/// Cohort marker for instructors.
pub const INSTRUCTOR_COHORT: &str = "I";

/// The five houses, in bucket order.
pub const HOUSES: [&str; 5] = [
    "Dumbledore's Army",
    "Gryffindor",
    "Hufflepuff",
    "Ravenclaw",
    "Slytherin",
];

/// `line` without its trailing `\n` or `\r\n`.
pub fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// One parsed roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub house: String,
    pub advisor: String,
    pub cohort: String,
}

impl Record {
    /// Parse a line using the default `|` delimiter.
    ///
    /// `line_no` is 1-based and only used for error reporting.
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        Self::parse_with(line, line_no, DEFAULT_DELIMITER)
    }

    /// Parse a line split on `delimiter`.
    ///
    /// Only the line terminator is stripped before splitting, so trailing
    /// empty fields survive whitespace delimiters such as `\t`. Trailing
    /// whitespace is then trimmed from the cohort field. Fields past the
    /// fifth are ignored.
    pub fn parse_with(line: &str, line_no: usize, delimiter: char) -> Result<Self> {
        let line = strip_terminator(line);
        let fields: Vec<&str> = line.split(delimiter).collect();

        if fields.len() < FIELD_COUNT {
            return Err(RosterError::MalformedRecord {
                line: line_no,
                fields: fields.len(),
                content: line.to_string(),
            });
        }

        Ok(Self {
            first_name: fields[0].to_string(),
            last_name: fields[1].to_string(),
            house: fields[2].to_string(),
            advisor: fields[3].to_string(),
            cohort: fields[4].trim_end().to_string(),
        })
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// True if this record's full name is exactly `name`.
    ///
    /// Compares without allocating the joined name.
    pub fn is_named(&self, name: &str) -> bool {
        name.len() == self.first_name.len() + 1 + self.last_name.len()
            && name.starts_with(self.first_name.as_str())
            && name[self.first_name.len()..].starts_with(' ')
            && name.ends_with(self.last_name.as_str())
    }

    /// True if the cohort is the ghost marker.
    pub fn is_ghost(&self) -> bool {
        self.cohort == GHOST_COHORT
    }

    /// True if the cohort is the instructor marker.
    pub fn is_instructor(&self) -> bool {
        self.cohort == INSTRUCTOR_COHORT
    }

    /// Project into the `(full_name, house, advisor, cohort)` row.
    pub fn to_person(&self) -> Person {
        Person {
            full_name: self.full_name(),
            house: self.house.clone(),
            advisor: self.advisor.clone(),
            cohort: self.cohort.clone(),
        }
    }
}

/// A `(full_name, house, advisor, cohort)` row, as returned by `all_data`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub full_name: String,
    pub house: String,
    pub advisor: String,
    pub cohort: String,
}

impl From<Person> for (String, String, String, String) {
    fn from(p: Person) -> Self {
        (p.full_name, p.house, p.advisor, p.cohort)
    }
}
