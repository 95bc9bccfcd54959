use crate::observations::{observe_route, Observation, StopPair};
use common::types::DepartureRecord;
use hashbrown::HashMap;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// An aggregated edge of the stop graph: the minimum travel time ever observed between the two
/// stops, and how many observations were merged into it. Taking the minimum over all routes and
/// departures approximates the geographical distance between the stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub stops: StopPair,
    pub min_time: u32,
    pub count: u32,
}

/// Build observations for every route in parallel and merge them into one edge per distinct
/// unordered stop pair.
///
/// The combine function (min, +) is commutative and associative, so the rayon fold/reduce fan-in
/// needs no locks and produces the same edges regardless of how the routes were partitioned.
pub fn aggregate(routes: &[Vec<DepartureRecord>]) -> Vec<Edge> {
    let merged: HashMap<StopPair, Observation> = routes
        .par_iter()
        .flat_map_iter(|route| observe_route(route))
        .fold(HashMap::new, |mut acc, (pair, observation)| {
            merge_into(&mut acc, pair, observation);
            acc
        })
        .reduce(HashMap::new, |mut left, right| {
            for (pair, observation) in right {
                merge_into(&mut left, pair, observation);
            }
            left
        });

    merged
        .into_iter()
        .map(|(stops, observation)| Edge {
            stops,
            min_time: observation.travel_time,
            count: observation.count,
        })
        .collect()
}

fn merge_into(
    observations: &mut HashMap<StopPair, Observation>,
    pair: StopPair,
    observation: Observation,
) {
    observations
        .entry(pair)
        .and_modify(|existing| {
            existing.travel_time = existing.travel_time.min(observation.travel_time);
            existing.count += observation.count;
        })
        .or_insert(observation);
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
    fn opposite_directions_merge_into_one_edge() {
        // One route takes 5 minutes from A to B, the return trip only 3
        let routes = vec![
            vec![rec(0, "A"), rec(5, "B")],
            vec![rec(10, "B"), rec(13, "A")],
        ];

        let edges = aggregate(&routes);

        assert_eq!(edges.len(), 1);
        let edge = &edges[0];
        assert_eq!(edge.stops, StopPair::new("a".into(), "b".into()).unwrap());
        assert_eq!(edge.min_time, 3);
        assert_eq!(edge.count, 2);
    }

    #[test]
    fn observations_across_routes_share_edges() {
        let routes = vec![
            vec![rec(0, "A"), rec(4, "B"), rec(10, "C")],
            vec![rec(100, "A"), rec(107, "B")],
        ];

        let mut edges = aggregate(&routes);
        edges.sort_by(|left, right| left.stops.cmp(&right.stops));

        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].min_time, edges[0].count), (4, 2));
        assert_eq!((edges[1].min_time, edges[1].count), (6, 1));
    }

    #[test]
    fn no_edges_across_routes() {
        // Two routes that share no consecutive pair: the last stop of one route and the first of
        // the next must not be linked
        let routes = vec![
            vec![rec(0, "A"), rec(5, "B")],
            vec![rec(6, "C"), rec(12, "D")],
        ];

        let edges = aggregate(&routes);

        assert_eq!(edges.len(), 2);
        assert!(edges
            .iter()
            .all(|edge| (edge.stops.first(), edge.stops.second()) != ("b", "c")));
    }
}
