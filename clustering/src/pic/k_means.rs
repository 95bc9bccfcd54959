use common::types::ClusterId;
use itertools::Itertools;
use ndarray::Array1;
use ordered_float::OrderedFloat;

// Cap on the Lloyd iterations; if the assignment has not settled by then, the best one found so
// far is good enough for a heuristic clustering.
const MAX_ITERATIONS: u32 = 100;

/// Deterministic 1-D k-means over the pseudo-eigenvector embedding.
///
/// Centroids are initialized at k evenly spaced quantiles of the sorted embedding instead of
/// random samples, stops are visited in ascending id order, and distance ties go to the smaller
/// cluster id. No randomness anywhere, so identical embeddings produce identical assignments.
pub fn cluster(embedding: &Array1<f64>, k: u32) -> Vec<ClusterId> {
    let n = embedding.len();
    debug_assert!(k >= 1 && (k as usize) < n);

    let sorted = embedding
        .iter()
        .copied()
        .sorted_by_key(|value| OrderedFloat(*value))
        .collect_vec();
    let mut centroids: Vec<f64> = (0..k)
        .map(|c| {
            let position = ((f64::from(c) + 0.5) * n as f64 / f64::from(k)) as usize;
            sorted[position.min(n - 1)]
        })
        .collect();

    let mut assignment = vec![ClusterId(0); n];
    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (stop, &value) in embedding.iter().enumerate() {
            let best = nearest_centroid(&centroids, value);
            if assignment[stop] != best {
                assignment[stop] = best;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        // Move every centroid to the mean of its members; a cluster that lost all members keeps
        // its previous position
        let mut sums = vec![0.0; k as usize];
        let mut counts = vec![0usize; k as usize];
        for (stop, &value) in embedding.iter().enumerate() {
            let c = assignment[stop].0 as usize;
            sums[c] += value;
            counts[c] += 1;
        }
        for c in 0..k as usize {
            if counts[c] > 0 {
                centroids[c] = sums[c] / counts[c] as f64;
            }
        }
    }

    assignment
}

fn nearest_centroid(centroids: &[f64], value: f64) -> ClusterId {
    let mut best = 0;
    let mut best_distance = (centroids[0] - value).abs();
    for (c, &centroid) in centroids.iter().enumerate().skip(1) {
        let distance = (centroid - value).abs();
        // Strict comparison keeps the smaller cluster id on ties
        if distance < best_distance {
            best = c;
            best_distance = distance;
        }
    }
    ClusterId(best as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_groups_end_up_in_separate_clusters() {
        let embedding = Array1::from_vec(vec![0.01, 0.3, 0.011, 0.29, 0.009, 0.31]);

        let assignment = cluster(&embedding, 2);

        assert_eq!(assignment[0], assignment[2]);
        assert_eq!(assignment[0], assignment[4]);
        assert_eq!(assignment[1], assignment[3]);
        assert_eq!(assignment[1], assignment[5]);
        assert_ne!(assignment[0], assignment[1]);
    }

    #[test]
    fn distance_ties_go_to_the_smaller_cluster_id() {
        // 0.0 is exactly between the two initial centroids -1.0 and 1.0
        let embedding = Array1::from_vec(vec![-1.0, 1.0, 0.0]);

        let assignment = cluster(&embedding, 2);

        assert_eq!(assignment, vec![ClusterId(0), ClusterId(1), ClusterId(0)]);
    }

    #[test]
    fn quantile_initialization_is_deterministic() {
        let embedding = Array1::from_vec(vec![0.5, 0.1, 0.4, 0.2, 0.3, 0.05, 0.45]);

        let first = cluster(&embedding, 3);
        let second = cluster(&embedding, 3);

        assert_eq!(first, second);
    }
}
