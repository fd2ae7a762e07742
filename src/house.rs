//! House buckets and per-house roster grouping.

use std::fmt;
use std::ops::Index;

use crate::record::Record;

/// The seven rosters, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    DumbledoresArmy,
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
    Ghosts,
    Instructors,
}

impl Bucket {
    pub const ALL: [Bucket; 7] = [
        Bucket::DumbledoresArmy,
        Bucket::Gryffindor,
        Bucket::Hufflepuff,
        Bucket::Ravenclaw,
        Bucket::Slytherin,
        Bucket::Ghosts,
        Bucket::Instructors,
    ];

    /// Position in the fixed output order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Bucket::DumbledoresArmy => "Dumbledore's Army",
            Bucket::Gryffindor => "Gryffindor",
            Bucket::Hufflepuff => "Hufflepuff",
            Bucket::Ravenclaw => "Ravenclaw",
            Bucket::Slytherin => "Slytherin",
            Bucket::Ghosts => "Ghosts",
            Bucket::Instructors => "Instructors",
        }
    }

    /// The bucket for a house field value, if it names one of the houses.
    pub fn from_house(house: &str) -> Option<Bucket> {
        match house {
            "Dumbledore's Army" => Some(Bucket::DumbledoresArmy),
            "Gryffindor" => Some(Bucket::Gryffindor),
            "Hufflepuff" => Some(Bucket::Hufflepuff),
            "Ravenclaw" => Some(Bucket::Ravenclaw),
            "Slytherin" => Some(Bucket::Slytherin),
            _ => None,
        }
    }

    /// Classify a record: house first, then ghost, then instructor.
    ///
    /// Returns `None` for records that fit no bucket; those are dropped.
    pub fn classify(record: &Record) -> Option<Bucket> {
        Bucket::from_house(&record.house).or_else(|| {
            if record.is_ghost() {
                Some(Bucket::Ghosts)
            } else if record.is_instructor() {
                Some(Bucket::Instructors)
            } else {
                None
            }
        })
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of `all_names_by_house`: seven sorted name lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseRosters {
    buckets: [Vec<String>; 7],
    dropped: usize,
}

impl HouseRosters {
    /// Group records by bucket and sort each roster.
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut rosters = HouseRosters::default();
        for record in records {
            rosters.push(record);
        }
        rosters.finish()
    }

    /// File one record into its bucket, or count it as dropped.
    pub fn push(&mut self, record: &Record) {
        match Bucket::classify(record) {
            Some(bucket) => {
                log::trace!("{} -> {bucket}", record.full_name());
                self.buckets[bucket.index()].push(record.full_name());
            }
            None => self.dropped += 1,
        }
    }

    /// Sort every bucket. Call once after the last `push`.
    pub fn finish(mut self) -> Self {
        for bucket in &mut self.buckets {
            bucket.sort();
        }
        self
    }

    /// Records that matched no bucket.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Total names across all seven buckets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Buckets paired with their rosters, in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[String])> {
        Bucket::ALL
            .into_iter()
            .map(move |b| (b, self.buckets[b.index()].as_slice()))
    }

    pub fn into_vec(self) -> Vec<Vec<String>> {
        self.buckets.into()
    }
}

impl Index<Bucket> for HouseRosters {
    type Output = [String];

    fn index(&self, bucket: Bucket) -> &[String] {
        &self.buckets[bucket.index()]
    }
}

impl From<HouseRosters> for Vec<Vec<String>> {
    fn from(rosters: HouseRosters) -> Self {
        rosters.into_vec()
    }
}
