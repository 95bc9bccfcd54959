use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1")]
    Version1 {
        /// Per-route departure records produced by the timetable extractor (JSON)
        routes_file: PathBuf,
        /// Where the final edge/cluster report is written
        output_file: PathBuf,
        #[serde(default)]
        clustering: ClusteringConfig,
    },
}

/// Tuning knobs for the power iteration clustering engine. The defaults are tuning choices with
/// no deeper derivation; override them per deployment in the config file.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ClusteringConfig {
    /// Number of clusters (k)
    #[serde(default = "default_num_clusters")]
    pub num_clusters: u32,
    /// Upper bound on power method iterations (T)
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// Early-stop threshold on the max per-coordinate change of the pseudo-eigenvector
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            num_clusters: default_num_clusters(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_num_clusters() -> u32 {
    25
}

fn default_max_iterations() -> u32 {
    10
}

fn default_tolerance() -> f64 {
    1e-6
}
