//! Re-scan roster executor.
//!
//! This crate answers the roster queries of `roster-query` without keeping
//! records in memory. Every query opens the roster file, streams it once
//! (twice for housemate lookup), and closes it before returning, so the
//! answer always reflects the file as it is at call time.

pub mod scan;
pub mod scanner;

pub use scan::{
    all_data, all_houses, all_names_by_house, find_duped_last_names, get_cohort_for,
    get_housemates_for, students_by_cohort,
};
pub use scanner::Scanner;
