use crate::errors::NumericRangeError;
use crate::graph::Edge;
use crate::stop_index::StopIndex;
use common::types::StopId;

/// One entry of the sparse symmetric affinity matrix. `i < j` always holds; the entry stands for
/// both W[i][j] and W[j][i]. There are no self-loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffinityEntry {
    pub i: StopId,
    pub j: StopId,
    pub weight: f64,
}

/// Convert aggregated edges into affinity entries, using 1/time² as the similarity measure.
///
/// Every edge already represents an unordered pair, so exactly one entry is produced per edge and
/// none can be lost to an `i < j` filter. The entries are sorted by (i, j) afterwards: the hash
/// map upstream has no iteration order, and a fixed entry order pins down both the report line
/// order and the floating point summation order inside the engine.
pub fn build_affinity_matrix(
    edges: &[Edge],
    stop_index: &StopIndex,
) -> Result<Vec<AffinityEntry>, NumericRangeError> {
    let mut entries = edges
        .iter()
        .map(|edge| {
            let a = stop_index
                .id_of(edge.stops.first())
                .expect("stop index was built from these edges");
            let b = stop_index
                .id_of(edge.stops.second())
                .expect("stop index was built from these edges");

            let weight = 1.0 / f64::from(edge.min_time).powi(2);
            if !weight.is_finite() {
                return Err(NumericRangeError {
                    stop_a: edge.stops.first().to_string(),
                    stop_b: edge.stops.second().to_string(),
                    min_time: edge.min_time,
                });
            }

            let (i, j) = if a < b { (a, b) } else { (b, a) };
            Ok(AffinityEntry { i, j, weight })
        })
        .collect::<Result<Vec<_>, _>>()?;

    entries.sort_by_key(|entry| (entry.i, entry.j));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observations::StopPair;

    fn edge(a: &str, b: &str, min_time: u32) -> Edge {
        Edge {
            stops: StopPair::new(a.into(), b.into()).unwrap(),
            min_time,
            count: 1,
        }
    }

    #[test]
    fn weight_is_inverse_square_of_min_time() {
        let edges = vec![edge("a", "b", 3)];
        let index = StopIndex::from_edges(&edges);

        let entries = build_affinity_matrix(&edges, &index).unwrap();

        assert_eq!(entries.len(), 1);
        assert!((entries[0].weight - 1.0 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn non_finite_weight_is_reported_not_emitted() {
        // A zero travel time would make the weight 1/0² = infinity, which must never reach the
        // report silently
        let edges = vec![edge("a", "b", 0)];
        let index = StopIndex::from_edges(&edges);

        let err = build_affinity_matrix(&edges, &index).unwrap_err();

        assert_eq!(err.min_time, 0);
        assert_eq!(err.stop_a, "a");
        assert_eq!(err.stop_b, "b");
    }

    #[test]
    fn one_entry_per_edge_sorted_by_index_pair() {
        let edges = vec![
            edge("c", "d", 2),
            edge("a", "d", 1),
            edge("a", "b", 4),
        ];
        let index = StopIndex::from_edges(&edges);

        let entries = build_affinity_matrix(&edges, &index).unwrap();

        assert_eq!(entries.len(), edges.len());
        let pairs: Vec<(u32, u32)> = entries.iter().map(|e| (e.i.0, e.j.0)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 3), (2, 3)]);
        assert!(entries.iter().all(|e| e.i < e.j));
    }
}
