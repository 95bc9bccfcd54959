use serde::Deserialize;
use std::fmt;

pub mod config;

// a continuous stop id
// "continuous" means that if we have n stops, all ids are from 0,...,n-1 and no number in that
// range is unused
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct StopId(pub u32);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Clusters are numbered 0,...,k-1 by the clustering engine
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ClusterId(pub u32);

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single scheduled departure, as handed over by the timetable extractor: the timestamp
/// (minutes since some fixed origin) plus the stop's display name. Stop names are assumed to be
/// non-empty and to start with an uppercase letter; they are treated as opaque UTF-8 otherwise.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DepartureRecord {
    pub time: u32,
    pub stop: String,
}
