use crate::graph::Edge;
use common::types::StopId;
use hashbrown::HashMap;
use itertools::Itertools;

/// Immutable two-way mapping between stop names and continuous stop ids.
///
/// Built once after edge aggregation and read-only afterwards, so it can be shared freely with
/// any parallel workers.
#[derive(Debug, Clone)]
pub struct StopIndex {
    ids: HashMap<String, StopId>,
    names: Vec<String>,
}

impl StopIndex {
    /// Collect the distinct stop names from all edge endpoints and assign ids 0..n-1 in
    /// lexicographic name order. A plain "distinct then enumerate" over a hash map would hand out
    /// different ids on every run; sorting first makes clustering runs reproducible.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let names: Vec<String> = edges
            .iter()
            .flat_map(|edge| [edge.stops.first(), edge.stops.second()])
            .unique()
            .map(str::to_owned)
            .sorted()
            .collect();

        let ids = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), StopId(id as u32)))
            .collect();

        Self { ids, names }
    }

    pub fn id_of(&self, name: &str) -> Option<StopId> {
        self.ids.get(name).copied()
    }

    pub fn name_of(&self, id: StopId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    /// Number of distinct stops (n)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
