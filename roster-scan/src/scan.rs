//! Query functions that read the roster file on every call.
//!
//! Each function opens `path`, streams records through a `RecordReader`,
//! and drops the file handle before returning, whether the scan ran to the
//! end or stopped at an early match. Nothing is cached between calls.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use roster_query::{
    CohortFilter, HouseRosters, ParseOptions, Person, Record, RecordReader, Result, source,
};

/// Open `path` and stream its records.
fn records(path: &Path, options: ParseOptions) -> Result<RecordReader<BufReader<File>>> {
    Ok(RecordReader::new(source::open(path)?, options))
}

/// First record named `name`, stopping the scan there.
fn find_named(path: &Path, options: ParseOptions, name: &str) -> Result<Option<Record>> {
    let mut reader = records(path, options)?;
    while let Some(record) = reader.next() {
        let record = record?;
        if record.is_named(name) {
            debug!("found {name:?} at line {}", reader.lines_read());
            return Ok(Some(record));
        }
    }
    Ok(None)
}

pub fn all_houses(path: &Path, options: ParseOptions) -> Result<BTreeSet<String>> {
    let mut houses = BTreeSet::new();
    for record in records(path, options)? {
        let record = record?;
        if !record.house.is_empty() {
            houses.insert(record.house);
        }
    }
    Ok(houses)
}

pub fn students_by_cohort(
    path: &Path,
    options: ParseOptions,
    filter: &CohortFilter,
) -> Result<Vec<String>> {
    let mut students = Vec::new();
    for record in records(path, options)? {
        let record = record?;
        if filter.matches(&record.cohort) {
            students.push(record.full_name());
        }
    }
    students.sort();
    Ok(students)
}

pub fn all_names_by_house(path: &Path, options: ParseOptions) -> Result<HouseRosters> {
    let mut rosters = HouseRosters::default();
    for record in records(path, options)? {
        rosters.push(&record?);
    }
    Ok(rosters.finish())
}

pub fn all_data(path: &Path, options: ParseOptions) -> Result<Vec<Person>> {
    records(path, options)?
        .map(|record| record.map(|r| r.to_person()))
        .collect()
}

/// Cohort of the first record named `name`.
///
/// Lines after the match are never read, so a malformed line there does not
/// fail the lookup.
pub fn get_cohort_for(path: &Path, options: ParseOptions, name: &str) -> Result<Option<String>> {
    Ok(find_named(path, options, name)?.map(|r| r.cohort))
}

pub fn find_duped_last_names(path: &Path, options: ParseOptions) -> Result<BTreeSet<String>> {
    let mut seen = HashSet::new();
    let mut dupes = BTreeSet::new();
    for record in records(path, options)? {
        let record = record?;
        if seen.contains(&record.last_name) {
            dupes.insert(record.last_name);
        } else {
            seen.insert(record.last_name);
        }
    }
    Ok(dupes)
}

/// Housemates of the first record named `name`.
///
/// Scans once to find the target, then again from the top to collect
/// everyone else with the same house and cohort.
pub fn get_housemates_for(
    path: &Path,
    options: ParseOptions,
    name: &str,
) -> Result<BTreeSet<String>> {
    let Some(target) = find_named(path, options, name)? else {
        return Ok(BTreeSet::new());
    };

    let mut housemates = BTreeSet::new();
    for record in records(path, options)? {
        let record = record?;
        if record.house == target.house && record.cohort == target.cohort && !record.is_named(name)
        {
            housemates.insert(record.full_name());
        }
    }
    Ok(housemates)
}
