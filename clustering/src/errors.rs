use std::fmt;
use std::fmt::Formatter;

/// Every stop in the graph is isolated (all degrees are zero), so there is no affinity structure
/// to iterate on. Individual isolated stops are fine and handled inside the engine; a graph made
/// up only of them is not.
#[derive(thiserror::Error, Debug)]
pub struct DisconnectedGraphError;

impl fmt::Display for DisconnectedGraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Every stop in the graph is isolated, nothing to cluster on")
    }
}

/// An affinity weight came out non-finite. With travel times being positive integers this should
/// not happen, but a NaN or infinity must never end up in the report silently.
#[derive(thiserror::Error, Debug)]
pub struct NumericRangeError {
    pub stop_a: String,
    pub stop_b: String,
    pub min_time: u32,
}

impl fmt::Display for NumericRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Affinity weight between '{}' and '{}' (min travel time {}) is not finite",
            self.stop_a, self.stop_b, self.min_time
        )
    }
}
