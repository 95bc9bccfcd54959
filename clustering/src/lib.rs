pub mod affinity;
pub mod errors;
pub mod graph;
pub mod observations;
pub mod pic;
pub mod report;
pub mod stop_index;
