//! Parse-once roster with the full query surface.
//!
//! A `Roster` reads its source a single time. Every query then walks the
//! in-memory records and derives its answer from scratch; no query result is
//! cached between calls.

use std::collections::{BTreeSet, HashSet};
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::cohort::CohortFilter;
use crate::error::{Result, RosterError};
use crate::house::HouseRosters;
use crate::record::{Person, Record};
use crate::source::{self, ParseOptions};

/// All records of one roster source, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse roster text with default options.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, ParseOptions::default())
    }

    pub fn parse_with(text: &str, options: ParseOptions) -> Result<Self> {
        Self::from_reader(text.as_bytes(), options)
    }

    pub fn from_reader<R: BufRead>(reader: R, options: ParseOptions) -> Result<Self> {
        source::read_records(reader, options).map(Self::new)
    }

    /// Read and parse the roster file at `path`.
    ///
    /// A missing or unreadable file is `RosterError::Io`.
    pub fn from_path(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let roster = Self::new(source::read_path(path, options)?);
        debug!("loaded {} records from {}", roster.len(), path.display());
        Ok(roster)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-empty house names.
    pub fn all_houses(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .filter(|r| !r.house.is_empty())
            .map(|r| r.house.clone())
            .collect()
    }

    /// Full names of everyone in `filter`'s cohort, sorted ascending.
    pub fn students_by_cohort(&self, filter: &CohortFilter) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .filter(|r| filter.matches(&r.cohort))
            .map(Record::full_name)
            .collect();
        names.sort();
        names
    }

    /// Seven sorted rosters: the five houses, then ghosts, then instructors.
    pub fn all_names_by_house(&self) -> HouseRosters {
        HouseRosters::build(&self.records)
    }

    /// One `(full_name, house, advisor, cohort)` row per record, in file order.
    pub fn all_data(&self) -> Vec<Person> {
        self.records.iter().map(Record::to_person).collect()
    }

    /// Cohort of the first record named `name`, or `None`.
    pub fn get_cohort_for(&self, name: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.is_named(name))
            .map(|r| r.cohort.as_str())
    }

    /// Last names that appear on two or more records, each listed once.
    pub fn find_duped_last_names(&self) -> BTreeSet<String> {
        let mut seen = HashSet::new();
        let mut dupes = BTreeSet::new();
        for record in &self.records {
            if !seen.insert(record.last_name.as_str()) {
                dupes.insert(record.last_name.clone());
            }
        }
        dupes
    }

    /// Everyone sharing house and cohort with the first record named `name`.
    ///
    /// Any record whose full name equals `name` is left out, so a second
    /// person with the same name and placement is never reported.
    pub fn get_housemates_for(&self, name: &str) -> BTreeSet<String> {
        let Some(target) = self.records.iter().find(|r| r.is_named(name)) else {
            return BTreeSet::new();
        };

        self.records
            .iter()
            .filter(|r| r.house == target.house && r.cohort == target.cohort)
            .filter(|r| !r.is_named(name))
            .map(Record::full_name)
            .collect()
    }
}

impl FromStr for Roster {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Vec<Record>> for Roster {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
