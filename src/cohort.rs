use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Cohort argument to `students_by_cohort`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CohortFilter {
    /// Every record with a real cohort label.
    #[default]
    All,
    /// Records whose cohort field equals this label.
    Named(String),
}

impl CohortFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn named(label: impl Into<String>) -> Self {
        CohortFilter::Named(label.into())
    }

    /// True if a record with this cohort field belongs in the result.
    ///
    /// Cohort fields of one character or less (`""`, `"G"`, `"I"`) never
    /// match, not even under `All`. Length counts chars, not bytes.
    pub fn matches(&self, cohort: &str) -> bool {
        if cohort.chars().nth(1).is_none() {
            return false;
        }
        match self {
            CohortFilter::All => true,
            CohortFilter::Named(label) => label == cohort,
        }
    }
}

impl FromStr for CohortFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl From<&str> for CohortFilter {
    fn from(s: &str) -> Self {
        if s == Self::ALL_LABEL {
            CohortFilter::All
        } else {
            CohortFilter::Named(s.to_string())
        }
    }
}

impl fmt::Display for CohortFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CohortFilter::All => f.write_str(Self::ALL_LABEL),
            CohortFilter::Named(label) => f.write_str(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_label_parses_to_all() {
        assert_eq!(CohortFilter::from("All"), CohortFilter::All);
        assert_eq!("All".parse::<CohortFilter>().unwrap(), CohortFilter::All);
        assert_eq!(
            CohortFilter::from("Fall 2015"),
            CohortFilter::named("Fall 2015")
        );
    }

    #[test]
    fn test_all_excludes_short_cohorts() {
        let all = CohortFilter::All;
        assert!(all.matches("Fall 2015"));
        assert!(!all.matches(""));
        assert!(!all.matches("G"));
        assert!(!all.matches("I"));
    }

    #[test]
    fn test_single_multibyte_char_excluded() {
        assert!(!CohortFilter::All.matches("é"));
        assert!(!CohortFilter::named("é").matches("é"));
        assert!(CohortFilter::All.matches("Été 2016"));
    }

    #[test]
    fn test_named_exact_match() {
        let f = CohortFilter::named("Fall 2015");
        assert!(f.matches("Fall 2015"));
        assert!(!f.matches("fall 2015"));
        assert!(!f.matches("Winter 2016"));
    }

    #[test]
    fn test_single_char_label_matches_nothing() {
        assert!(!CohortFilter::named("G").matches("G"));
    }

    #[test]
    fn test_display_round_trips_label() {
        assert_eq!(CohortFilter::All.to_string(), "All");
        assert_eq!(CohortFilter::named("Spring 2016").to_string(), "Spring 2016");
    }
}
