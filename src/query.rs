//! The query surface shared by every roster executor.

use std::collections::BTreeSet;

use crate::cohort::CohortFilter;
use crate::error::Result;
use crate::house::HouseRosters;
use crate::record::Person;
use crate::roster::Roster;

/// The seven roster queries.
///
/// `Roster` answers from records already in memory and never fails.
/// Executors that read their source per call surface I/O and parse
/// failures through the `Result`.
///
/// `Roster` keeps infallible inherent methods of the same names, and those
/// win at method-call syntax. Code generic over executors (`cli::execute`)
/// goes through this trait; to reach the trait method on a concrete
/// `Roster`, call `RosterQueries::all_houses(&roster)`.
pub trait RosterQueries {
    fn all_houses(&self) -> Result<BTreeSet<String>>;

    fn students_by_cohort(&self, filter: &CohortFilter) -> Result<Vec<String>>;

    fn all_names_by_house(&self) -> Result<HouseRosters>;

    fn all_data(&self) -> Result<Vec<Person>>;

    fn get_cohort_for(&self, name: &str) -> Result<Option<String>>;

    fn find_duped_last_names(&self) -> Result<BTreeSet<String>>;

    fn get_housemates_for(&self, name: &str) -> Result<BTreeSet<String>>;
}

impl RosterQueries for Roster {
    fn all_houses(&self) -> Result<BTreeSet<String>> {
        Ok(Roster::all_houses(self))
    }

    fn students_by_cohort(&self, filter: &CohortFilter) -> Result<Vec<String>> {
        Ok(Roster::students_by_cohort(self, filter))
    }

    fn all_names_by_house(&self) -> Result<HouseRosters> {
        Ok(Roster::all_names_by_house(self))
    }

    fn all_data(&self) -> Result<Vec<Person>> {
        Ok(Roster::all_data(self))
    }

    fn get_cohort_for(&self, name: &str) -> Result<Option<String>> {
        Ok(Roster::get_cohort_for(self, name).map(str::to_string))
    }

    fn find_duped_last_names(&self) -> Result<BTreeSet<String>> {
        Ok(Roster::find_duped_last_names(self))
    }

    fn get_housemates_for(&self, name: &str) -> Result<BTreeSet<String>> {
        Ok(Roster::get_housemates_for(self, name))
    }
}
