use crate::affinity::AffinityEntry;
use crate::errors::DisconnectedGraphError;
use common::types::config::ClusteringConfig;
use common::types::{ClusterId, StopId};
use log::debug;
use ndarray::Array1;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

pub mod k_means;

/// Tuning parameters of the engine, taken 1:1 from the config file
#[derive(Debug, Clone, Copy)]
pub struct PicParams {
    pub num_clusters: u32,
    pub max_iterations: u32,
    pub tolerance: f64,
}

impl From<ClusteringConfig> for PicParams {
    fn from(config: ClusteringConfig) -> Self {
        Self {
            num_clusters: config.num_clusters,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }
}

/// The engine's terminal output: one cluster id per stop id. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterAssignment {
    clusters: Vec<ClusterId>,
}

impl ClusterAssignment {
    pub fn cluster_of(&self, stop: StopId) -> Option<ClusterId> {
        self.clusters.get(stop.0 as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// Power iteration clustering over a sparse symmetric affinity matrix.
///
/// Approximates a leading pseudo-eigenvector of the row-normalized affinity matrix by repeated
/// matrix-vector multiplication, then clusters the stops on that 1-D embedding with a
/// deterministic k-means. A full eigendecomposition is never computed.
///
/// The entries must be sorted by (i, j) (see `build_affinity_matrix`); together with the
/// tie-break rules in the k-means step this makes two runs over the same graph bit-identical.
pub fn train(
    num_stops: usize,
    entries: &[AffinityEntry],
    params: PicParams,
) -> Result<ClusterAssignment, DisconnectedGraphError> {
    if num_stops == 0 {
        return Ok(ClusterAssignment { clusters: vec![] });
    }
    let rows = adjacency_rows(num_stops, entries);
    // Each undirected entry contributes to both endpoints' degree
    let degrees: Vec<f64> = rows
        .iter()
        .map(|row| row.iter().map(|(_, weight)| weight).sum())
        .collect();
    let total_degree: f64 = degrees.iter().sum();
    if total_degree == 0.0 {
        return Err(DisconnectedGraphError);
    }

    // A zero cluster count degenerates to a single cluster
    let num_clusters = params.num_clusters.max(1);
    if num_clusters as usize >= num_stops {
        // Valid degenerate case: every stop forms its own cluster
        return Ok(ClusterAssignment {
            clusters: (0..num_stops as u32).map(ClusterId).collect(),
        });
    }

    // Degree-proportional start vector. Isolated stops start at zero and are kept there by the
    // identity rows below, so they never influence anyone else.
    let mut embedding = Array1::from_iter(degrees.iter().map(|degree| degree / total_degree));

    for iteration in 1..=params.max_iterations {
        let next = step(&rows, &degrees, &embedding);
        let delta = max_abs_diff(&next, &embedding);
        embedding = next;
        if delta < params.tolerance {
            debug!(target: "pic", "Power iteration converged after {} iterations (delta {delta:e})", iteration);
            break;
        }
    }

    let clusters = k_means::cluster(&embedding, num_clusters);
    Ok(ClusterAssignment { clusters })
}

/// One application of the row-normalized transition matrix R = D⁻¹W, applied lazily over the
/// sparse rows, followed by a rescale to L1 norm 1. The iterations themselves are strictly
/// sequential; within one step the rows are independent and computed in parallel.
fn step(rows: &[Vec<(usize, f64)>], degrees: &[f64], v: &Array1<f64>) -> Array1<f64> {
    let raw: Vec<f64> = rows
        .par_iter()
        .enumerate()
        .map(|(i, row)| {
            if degrees[i] == 0.0 {
                // Isolated stop: R acts as identity on this coordinate
                v[i]
            } else {
                row.iter().map(|&(j, weight)| weight * v[j]).sum::<f64>() / degrees[i]
            }
        })
        .collect();

    let mut next = Array1::from_vec(raw);
    let norm: f64 = next.iter().map(|x| x.abs()).sum();
    if norm > 0.0 {
        next.mapv_inplace(|x| x / norm);
    }
    next
}

/// Expand the upper-triangular entries into one neighbor list per row. Rows are sorted by column
/// index, which fixes the floating point summation order.
fn adjacency_rows(num_stops: usize, entries: &[AffinityEntry]) -> Vec<Vec<(usize, f64)>> {
    let mut rows: Vec<Vec<(usize, f64)>> = vec![Vec::new(); num_stops];
    for entry in entries {
        let (i, j) = (entry.i.0 as usize, entry.j.0 as usize);
        rows[i].push((j, entry.weight));
        rows[j].push((i, entry.weight));
    }
    for row in &mut rows {
        row.sort_unstable_by_key(|&(j, _)| j);
    }
    rows
}

fn max_abs_diff(left: &Array1<f64>, right: &Array1<f64>) -> f64 {
    left.iter()
        .zip(right.iter())
        .map(|(l, r)| (l - r).abs())
        .fold(0.0, f64::max)
}
