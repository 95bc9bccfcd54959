use common::types::DepartureRecord;
use itertools::Itertools;

/// Canonical unordered stop-name pair. Both names are sorted at construction, so {A,B} and {B,A}
/// land on the same key and aggregation is direction-agnostic by construction.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct StopPair {
    a: String,
    b: String,
}

impl StopPair {
    /// Expects already case-normalized names. Returns `None` for self-pairs (a stop listed twice
    /// in a row never forms an edge).
    pub fn new(x: String, y: String) -> Option<Self> {
        match x.cmp(&y) {
            std::cmp::Ordering::Less => Some(Self { a: x, b: y }),
            std::cmp::Ordering::Greater => Some(Self { a: y, b: x }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.a
    }

    pub fn second(&self) -> &str {
        &self.b
    }
}

/// A travel-time observation between two adjacent stops of a single route:
/// how long the vehicle took, and how many times this was seen (1 until merged).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub travel_time: u32,
    pub count: u32,
}

/// Turn one route's ordered departure records into travel-time observations between consecutive
/// stops. Stop names are lower-cased here, since timetables spell the same stop inconsistently.
///
/// Observations with a non-positive time difference are dropped: those are noise in the source
/// data (out-of-order rows, duplicated timestamps), not an error. No pairs are ever formed across
/// routes.
pub fn observe_route(records: &[DepartureRecord]) -> Vec<(StopPair, Observation)> {
    records
        .iter()
        .tuple_windows()
        .filter_map(|(from, to)| {
            let travel_time = i64::from(to.time) - i64::from(from.time);
            if travel_time <= 0 {
                return None;
            }
            let pair = StopPair::new(from.stop.to_lowercase(), to.stop.to_lowercase())?;
            let observation = Observation {
                travel_time: travel_time as u32,
                count: 1,
            };
            Some((pair, observation))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(time: u32, stop: &str) -> DepartureRecord {
        DepartureRecord {
            time,
            stop: stop.to_string(),
        }
    }

    #[test]
    fn strictly_increasing_route_yields_one_observation_per_hop() {
        let route = vec![rec(100, "A"), rec(105, "B"), rec(110, "C"), rec(112, "D")];

        let observations = observe_route(&route);

        assert_eq!(observations.len(), 3);
        let times: Vec<u32> = observations.iter().map(|(_, o)| o.travel_time).collect();
        assert_eq!(times, vec![5, 5, 2]);
        assert!(observations.iter().all(|(_, o)| o.count == 1));
    }

    #[test]
    fn non_monotonic_and_duplicate_timestamps_are_dropped() {
        // B -> C goes back in time, C -> D does not move at all
        let route = vec![rec(100, "A"), rec(105, "B"), rec(103, "C"), rec(103, "D")];

        let observations = observe_route(&route);

        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].0, StopPair::new("a".into(), "b".into()).unwrap());
    }

    #[test]
    fn names_are_case_normalized_and_pairs_canonicalized() {
        let route = vec![rec(10, "Zebra Street"), rec(15, "Alpha Square")];

        let observations = observe_route(&route);

        let (pair, _) = &observations[0];
        assert_eq!(pair.first(), "alpha square");
        assert_eq!(pair.second(), "zebra street");
    }

    #[test]
    fn self_pairs_never_form_an_edge() {
        let route = vec![rec(10, "Loop"), rec(15, "LOOP"), rec(20, "Next")];

        let observations = observe_route(&route);

        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].0.first(), "loop");
        assert_eq!(observations[0].0.second(), "next");
    }

    #[test]
    fn empty_and_single_stop_routes_yield_nothing() {
        assert!(observe_route(&[]).is_empty());
        assert!(observe_route(&[rec(5, "Lonely")]).is_empty());
    }
}
