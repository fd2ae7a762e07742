//! `RosterQueries` backed by the re-scan functions.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use roster_query::{
    CohortFilter, HouseRosters, ParseOptions, Person, Result, RosterQueries,
};

use crate::scan;

/// A roster path plus parse options. Holds no file handle and no records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanner {
    path: PathBuf,
    options: ParseOptions,
}

impl Scanner {
    pub fn new(path: impl Into<PathBuf>, options: ParseOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterQueries for Scanner {
    fn all_houses(&self) -> Result<BTreeSet<String>> {
        scan::all_houses(&self.path, self.options)
    }

    fn students_by_cohort(&self, filter: &CohortFilter) -> Result<Vec<String>> {
        scan::students_by_cohort(&self.path, self.options, filter)
    }

    fn all_names_by_house(&self) -> Result<HouseRosters> {
        scan::all_names_by_house(&self.path, self.options)
    }

    fn all_data(&self) -> Result<Vec<Person>> {
        scan::all_data(&self.path, self.options)
    }

    fn get_cohort_for(&self, name: &str) -> Result<Option<String>> {
        scan::get_cohort_for(&self.path, self.options, name)
    }

    fn find_duped_last_names(&self) -> Result<BTreeSet<String>> {
        scan::find_duped_last_names(&self.path, self.options)
    }

    fn get_housemates_for(&self, name: &str) -> Result<BTreeSet<String>> {
        scan::get_housemates_for(&self.path, self.options, name)
    }
}
